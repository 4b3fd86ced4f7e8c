//! Bound-state energies of a particle in a one-dimensional finite square well.
//!
//! The calculation runs in four stages. The physical description of the well (thickness in
//! meters, effective mass ratio, depth in eV) is mapped to a dimensionless strength `P`. The
//! number of bound states `N(P)` validates the requested quantum number. The eigen-equation
//! `n (pi/2) - asin(r) - r P = 0` is solved for the normalized momentum `r`. The
//! dimensionless energy `2 (P r)²` is then converted back to electron volts.
//!
//! ```
//! use qwell::QuantumWell;
//!
//! let well = QuantumWell::new(10e-9, 0.067, 0.3);
//! let levels = well.spectrum().unwrap();
//!
//! assert_eq!(levels.len(), 3);
//! assert!(levels.iter().all(|level| level.energy < 0.3));
//! ```
//!
//! Reference: D. L. Aronstein and C. R. Stroud, Jr., Am. J. Phys. 68, 943 (2000).

pub mod error;
pub mod math;
pub mod solver;
pub mod types;
pub mod well;
pub mod wells;

pub use error::QwellError;
pub use math::scaling::{infinite_well_ground_state_energy, num_states_scaled, well_strength};
pub use solver::{EigenSolver, SolverOptions};
pub use types::{
    EigenSolution, EnergyLevel, QuantumWell, StateSelection, WellResult, WellView,
};
pub use well::{energy, energy_scaled, solve_batch, solve_well, spectrum, spectrum_scaled};
pub use wells::{LengthUnit, WellSet, WellSpec, parse_length};
