//! Mathematical building blocks of the finite-well calculation.
//!
//! The constants module holds the unit prefactors, `scaling` maps between physical and
//! dimensionless quantities, and `transcendental` evaluates the eigen-equation that the
//! solver iterates on.

/// Physical unit prefactors and numerical defaults.
pub mod constants;

/// Conversions between physical inputs and the dimensionless well-strength parameter,
/// bound-state counting, and conversion of dimensionless energies back to electron volts.
pub mod scaling;

/// The transcendental eigen-equation of the finite square well and its linearized
/// correction.
pub mod transcendental;
