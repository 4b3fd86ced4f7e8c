//! Bound-state energies of physical wells.
//!
//! This module strings the pipeline together: the physical description of a well is mapped
//! to its strength `P`, the requested quantum number is checked against the number of bound
//! states, the eigen-equation is solved, and the dimensionless energy is converted back to
//! electron volts. A well with a non-positive potential depth confines nothing and
//! short-circuits to zero energy without touching the solver.

use crate::{
    error::QwellError,
    math::scaling,
    solver::EigenSolver,
    types::{EigenSolution, EnergyLevel, QuantumWell, StateSelection, WellResult, WellView},
};
use log::info;
use rayon::prelude::*;

/// Dimensionless energy `2 (P r)²` of the `n`-th bound state of a well of strength `P`.
///
/// # Examples
///
/// ```
/// let e = qwell::energy_scaled(6.0, 4).unwrap();
/// assert!((e - 54.6214).abs() < 1e-4);
/// ```
pub fn energy_scaled(strength: f64, n: u32) -> Result<f64, QwellError> {
    Ok(EigenSolver::new().solve(strength, n)?.scaled_energy)
}

/// Confinement energy in eV of the `n`-th bound state of a physical well.
///
/// The thickness is in meters, the mass is a fraction of the free electron mass, and the
/// potential depth is in eV. A non-positive depth returns exactly zero for any `n`.
///
/// # Errors
///
/// Returns an invalid-argument error for a non-positive thickness or mass ratio, a NaN
/// depth, or a quantum number that is not bound, plus any solver failure.
///
/// # Examples
///
/// ```
/// // A 10 nm GaAs well, 0.3 eV deep.
/// let e1 = qwell::energy(10e-9, 0.067, 0.3, 1).unwrap();
/// assert!(e1 > 0.0 && e1 < 0.3);
///
/// assert_eq!(qwell::energy(10e-9, 0.067, 0.0, 1).unwrap(), 0.0);
/// ```
pub fn energy(
    thickness: f64,
    mass_ratio: f64,
    potential_depth: f64,
    n: u32,
) -> Result<f64, QwellError> {
    let well = QuantumWell::new(thickness, mass_ratio, potential_depth);
    let result = solve_well(&EigenSolver::new(), &well, StateSelection::Single(n))?;
    Ok(result.levels.first().map_or(0.0, |level| level.energy))
}

/// Every bound state of a well of strength `P`, in increasing order of `n`.
pub fn spectrum_scaled(strength: f64) -> Result<Vec<EigenSolution>, QwellError> {
    let solver = EigenSolver::new();
    let num_states = scaling::num_states_scaled(strength)?;
    (1..=num_states)
        .map(|n| solver.solve(strength, n))
        .collect()
}

/// Every bound level of a physical well. Empty when the well confines nothing.
pub fn spectrum<W: WellView>(well: &W) -> Result<Vec<EnergyLevel>, QwellError> {
    Ok(solve_well(&EigenSolver::new(), well, StateSelection::All)?.levels)
}

/// Solves the selected levels of a single well with the given solver.
pub fn solve_well<W: WellView>(
    solver: &EigenSolver,
    well: &W,
    selection: StateSelection,
) -> Result<WellResult, QwellError> {
    let thickness = well.thickness();
    let mass_ratio = well.mass_ratio();
    let strength = scaling::well_strength(thickness, mass_ratio, well.potential_depth())?;

    if well.potential_depth() <= 0.0 {
        return Ok(WellResult {
            strength,
            num_states: 0,
            levels: Vec::new(),
        });
    }

    let num_states = scaling::num_states_scaled(strength)?;
    let quantum_numbers = match selection {
        StateSelection::Single(n) => {
            scaling::validate_quantum_number(strength, n)?;
            n..=n
        }
        StateSelection::All => 1..=num_states,
    };

    let levels = quantum_numbers
        .map(|n| {
            let solution = solver.solve(strength, n)?;
            Ok(EnergyLevel {
                n,
                momentum: solution.momentum,
                scaled_energy: solution.scaled_energy,
                energy: scaling::to_physical(solution.scaled_energy, mass_ratio, thickness),
                iterations: solution.iterations,
            })
        })
        .collect::<Result<Vec<_>, QwellError>>()?;

    Ok(WellResult {
        strength,
        num_states,
        levels,
    })
}

/// Solves many independent wells in parallel.
///
/// Each well gets its own result, in input order, so one failing well does not hide the
/// others.
pub fn solve_batch<W: WellView + Sync>(
    solver: &EigenSolver,
    wells: &[W],
    selection: StateSelection,
) -> Vec<Result<WellResult, QwellError>> {
    info!("Solving {} wells ({:?})", wells.len(), selection);
    wells
        .par_iter()
        .map(|well| solve_well(solver, well, selection))
        .collect()
}

impl QuantumWell {
    /// The dimensionless well-strength parameter `P`, zero for a non-confining well.
    pub fn strength(&self) -> Result<f64, QwellError> {
        scaling::well_strength(self.thickness, self.mass_ratio, self.potential_depth)
    }

    /// The number of bound states, zero for a non-confining well.
    pub fn num_states(&self) -> Result<u32, QwellError> {
        let strength = self.strength()?;
        if self.potential_depth <= 0.0 {
            return Ok(0);
        }
        scaling::num_states_scaled(strength)
    }

    /// Confinement energy in eV of the `n`-th bound state.
    pub fn energy(&self, n: u32) -> Result<f64, QwellError> {
        energy(self.thickness, self.mass_ratio, self.potential_depth, n)
    }

    /// Confinement energy in eV of the ground state.
    pub fn ground_state_energy(&self) -> Result<f64, QwellError> {
        self.energy(1)
    }

    /// Every bound level of the well.
    pub fn spectrum(&self) -> Result<Vec<EnergyLevel>, QwellError> {
        spectrum(self)
    }

    /// Ground-state energy in eV of an infinitely deep well of the same thickness and mass.
    pub fn infinite_well_reference(&self) -> Result<f64, QwellError> {
        scaling::infinite_well_ground_state_energy(self.thickness, self.mass_ratio)
    }
}
