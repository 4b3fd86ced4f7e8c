//! Physical and numerical constants for the finite square well.
//!
//! The two unit prefactors fold together the electron mass, the reduced Planck constant and
//! the elementary charge so that well thickness enters in meters, potential depth in electron
//! volts and the effective mass as a fraction of the free electron mass.

use std::f64::consts::FRAC_PI_2;

/// Multiplier mapping `a * sqrt(m * U)` (meters, mass ratio, eV) to the dimensionless
/// well-strength parameter `P`.
///
/// This is `sqrt(2 * m_e * e) / (2 * hbar)`, in units of m⁻¹ eV⁻¹ᐟ².
pub const STRENGTH_PREFACTOR: f64 = 2.561584e9;

/// Multiplier mapping a dimensionless energy back to electron volts, `hbar² / (2 * m_e * e)`
/// in units of eV m².
///
/// The physical energy is `E * ENERGY_PREFACTOR / (m * a²)`.
pub const ENERGY_PREFACTOR: f64 = 7.61996e-20;

/// Numerator of the infinite-well ground-state energy, `pi² hbar² / (2 m_e e)`, in eV m².
pub const INFINITE_WELL_PREFACTOR: f64 = 3.7603e-19;

/// Width in `P` of one bound-state branch of the eigen-equation.
pub const BRANCH_WIDTH: f64 = FRAC_PI_2;

/// Default residual tolerance for the eigenvalue iteration.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;

/// Meters per nanometer.
pub const NM_TO_M: f64 = 1.0e-9;

/// Meters per angstrom.
pub const ANGSTROM_TO_M: f64 = 1.0e-10;

/// Meters per micrometer.
pub const UM_TO_M: f64 = 1.0e-6;
