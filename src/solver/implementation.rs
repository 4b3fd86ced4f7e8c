//! This module implements the core `EigenSolver` for the finite square well.
//!
//! The solver finds the normalized momentum `r` of the `n`-th bound state, the root of
//! `n (pi/2) - asin(r) - r P = 0`. The equation is ill-conditioned as `r -> 1`, where the
//! derivative of `asin` diverges, so instead of Newton or bisection the solver runs a damped
//! fixed-point iteration. Each step applies a linearized correction scaled by a relaxation
//! weight, and the weight is halved until the step shrinks the residual. The weight belongs
//! to a single call and never grows back within it.

use super::options::SolverOptions;
use crate::{
    error::QwellError,
    math::{scaling, transcendental},
    types::EigenSolution,
};
use log::{debug, trace, warn};

/// The eigenvalue solver for the finite square well.
///
/// The solver holds only its options; every call to [`EigenSolver::solve`] starts from a
/// fresh state, so one solver can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EigenSolver {
    /// Configuration options such as the residual tolerance and iteration caps.
    options: SolverOptions,
}

impl EigenSolver {
    /// Creates a new `EigenSolver` with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use qwell::EigenSolver;
    ///
    /// let solver = EigenSolver::new();
    /// assert_eq!(solver.options().tolerance, 1e-6);
    /// ```
    pub fn new() -> Self {
        Self {
            options: SolverOptions::default(),
        }
    }

    /// Configures the solver with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use qwell::{EigenSolver, SolverOptions};
    ///
    /// let options = SolverOptions {
    ///     tolerance: 1e-10,
    ///     ..Default::default()
    /// };
    ///
    /// let solver = EigenSolver::new().with_options(options);
    /// ```
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options this solver runs with.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Solves the eigen-equation for the `n`-th bound state of a well of strength `P`.
    ///
    /// # Arguments
    ///
    /// * `strength` - The dimensionless well-strength parameter `P >= 0`.
    /// * `n` - The quantum number, `1 <= n <= N(P)`.
    ///
    /// # Errors
    ///
    /// * `InvalidStrength` or `QuantumNumberOutOfRange` if the inputs do not describe a bound
    ///   state, and `InvalidTolerance` if the options are unusable.
    /// * `DomainViolation` if an accepted momentum leaves `(0, 1]`.
    /// * `NotConverged` or `DampingExhausted` if an iteration cap is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use qwell::EigenSolver;
    ///
    /// let solution = EigenSolver::new().solve(4.5, 2).unwrap();
    ///
    /// assert!(solution.momentum > 0.0 && solution.momentum <= 1.0);
    /// assert!((solution.scaled_energy - 12.9179).abs() < 1e-4);
    /// ```
    pub fn solve(&self, strength: f64, n: u32) -> Result<EigenSolution, QwellError> {
        let strength = scaling::validate_strength(strength)?;
        scaling::validate_quantum_number(strength, n)?;
        self.options.validate()?;

        let SolverOptions {
            tolerance,
            max_iterations,
            max_halvings,
        } = self.options;

        let mut momentum = transcendental::initial_guess(strength, n);
        let mut residual = transcendental::residual(strength, n, momentum);
        let mut weight = 1.0_f64;
        let mut total_halvings = 0_u32;
        let mut iteration = 0_u32;

        debug!(
            "Solving state n = {} for P = {} from r0 = {:.6}, eta0 = {:.3e}",
            n, strength, momentum, residual
        );

        loop {
            if !(momentum.is_finite() && momentum > 0.0 && momentum <= 1.0) {
                warn!(
                    "Momentum r = {} left (0, 1] for n = {}, P = {} at iteration {}",
                    momentum, n, strength, iteration
                );
                return Err(QwellError::DomainViolation {
                    n,
                    momentum,
                    iteration,
                });
            }

            if residual.abs() < tolerance {
                debug!(
                    "Converged n = {} for P = {} after {} iterations ({} halvings, w = {:e})",
                    n, strength, iteration, total_halvings, weight
                );
                return Ok(EigenSolution {
                    momentum,
                    residual,
                    scaled_energy: transcendental::scaled_energy(strength, momentum),
                    iterations: iteration,
                    halvings: total_halvings,
                    relaxation_weight: weight,
                });
            }

            if iteration >= max_iterations {
                warn!(
                    "No convergence for n = {}, P = {} within {} iterations (eta = {:.3e})",
                    n, strength, max_iterations, residual
                );
                return Err(QwellError::NotConverged {
                    max_iterations,
                    residual,
                });
            }
            iteration += 1;

            let correction = transcendental::linearized_correction(strength, momentum, residual);
            let mut halvings = 0_u32;

            loop {
                let candidate = transcendental::relaxed_step(momentum, correction, weight);
                let candidate_residual = transcendental::residual(strength, n, candidate);

                // A candidate past r = 1 has a NaN residual and fails this comparison.
                if (candidate_residual / residual).abs() < 1.0 {
                    trace!(
                        "iteration {}: r = {:.12}, eta = {:.3e}, w = {:e}",
                        iteration, candidate, candidate_residual, weight
                    );
                    momentum = candidate;
                    residual = candidate_residual;
                    break;
                }

                if halvings >= max_halvings {
                    warn!(
                        "Damping search exhausted for n = {}, P = {} at iteration {} (eta = {:.3e})",
                        n, strength, iteration, residual
                    );
                    return Err(QwellError::DampingExhausted {
                        iteration,
                        halvings,
                        residual,
                    });
                }

                weight *= 0.5;
                halvings += 1;
                trace!("iteration {}: rejected r = {}, w -> {:e}", iteration, candidate, weight);
            }

            total_halvings += halvings;
        }
    }
}
