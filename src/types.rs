//! This module defines the core types used in the qwell library for describing wells and
//! reporting solved energy levels.
//!
//! It includes the `WellView` trait for abstracting access to a well's physical description,
//! the `QuantumWell` struct as its owned implementation, and the result types produced by the
//! solver and the spectrum routines.

use serde::Serialize;

/// A trait for viewing the physical description of a finite square well without owning it.
///
/// The spectrum and batch routines are generic over this trait, so callers can pass their
/// own layer or heterostructure types directly.
pub trait WellView {
    /// Returns the well thickness in meters.
    fn thickness(&self) -> f64;

    /// Returns the effective mass inside the well as a fraction of the free electron mass.
    fn mass_ratio(&self) -> f64;

    /// Returns the depth of the potential well in electron volts.
    ///
    /// Non-positive depths describe a well that confines nothing.
    fn potential_depth(&self) -> f64;
}

/// A concrete finite square well.
///
/// Construction does not validate the fields; every computation does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantumWell {
    /// Well thickness in meters.
    pub thickness: f64,
    /// Effective mass ratio `m* / m_e`.
    pub mass_ratio: f64,
    /// Potential depth in electron volts.
    pub potential_depth: f64,
}

impl QuantumWell {
    /// Creates a well from its thickness in meters, mass ratio and depth in eV.
    ///
    /// No validation happens here; the solving functions reject invalid geometry.
    pub const fn new(thickness: f64, mass_ratio: f64, potential_depth: f64) -> Self {
        Self {
            thickness,
            mass_ratio,
            potential_depth,
        }
    }
}

impl WellView for QuantumWell {
    #[inline(always)]
    fn thickness(&self) -> f64 {
        self.thickness
    }

    #[inline(always)]
    fn mass_ratio(&self) -> f64 {
        self.mass_ratio
    }

    #[inline(always)]
    fn potential_depth(&self) -> f64 {
        self.potential_depth
    }
}

/// The converged state of a single eigenvalue solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EigenSolution {
    /// The normalized momentum `r`, in `(0, 1]`.
    pub momentum: f64,
    /// The eigen-equation residual at `momentum`; its magnitude is below the tolerance.
    pub residual: f64,
    /// The dimensionless energy `2 (P r)²`.
    pub scaled_energy: f64,
    /// The number of accepted steps of the outer loop.
    pub iterations: u32,
    /// The total number of relaxation-weight halvings over the whole solve.
    pub halvings: u32,
    /// The relaxation weight in effect when the solve finished.
    pub relaxation_weight: f64,
}

/// One bound level of a physical well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyLevel {
    /// The quantum number, starting at 1 for the ground state.
    pub n: u32,
    /// The normalized momentum `r` of the level.
    pub momentum: f64,
    /// The dimensionless energy `2 (P r)²`.
    pub scaled_energy: f64,
    /// The confinement energy in electron volts, measured from the bottom of the well.
    pub energy: f64,
    /// The number of solver iterations spent on this level.
    pub iterations: u32,
}

/// Which bound levels to compute for a well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSelection {
    /// A single level with the given quantum number.
    Single(u32),
    /// Every bound level, `1..=N(P)`.
    All,
}

impl Default for StateSelection {
    fn default() -> Self {
        Self::Single(1)
    }
}

/// The solved levels of one well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellResult {
    /// The dimensionless well-strength parameter `P`.
    pub strength: f64,
    /// The number of bound states, or 0 when the well confines nothing.
    pub num_states: u32,
    /// The requested levels, in increasing order of `n`.
    ///
    /// Empty when the potential depth is not positive.
    pub levels: Vec<EnergyLevel>,
}
