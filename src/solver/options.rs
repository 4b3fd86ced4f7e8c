//! This module defines configuration options for the eigenvalue solver.
//!
//! It provides the `SolverOptions` struct, which sets the residual tolerance and bounds both
//! the outer fixed-point loop and the inner damping search. Neither loop has a natural
//! termination guarantee in floating point, so both caps are always enforced.

use crate::error::QwellError;
use crate::math::constants::DEFAULT_TOLERANCE;

/// Configuration parameters for the eigenvalue solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// The convergence tolerance on the eigen-equation residual.
    ///
    /// The solver stops as soon as `|eta| < tolerance` for the current accepted momentum.
    pub tolerance: f64,
    /// The maximum number of accepted steps of the outer loop.
    ///
    /// Weak wells converge slowly: each accepted step shrinks the residual by roughly a
    /// factor `1 - P`, so a well with `P = 1e-5` needs close to a million steps. The default
    /// leaves an order of magnitude of headroom over that.
    pub max_iterations: u32,
    /// The maximum number of times the relaxation weight may be halved while searching for
    /// a single accepted step.
    ///
    /// Strong wells overshoot by a factor of about `P`, so a search needs roughly
    /// `log2(P)` halvings.
    pub max_halvings: u32,
}

impl SolverOptions {
    /// Checks that the options describe a usable solver.
    pub fn validate(&self) -> Result<(), QwellError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(QwellError::InvalidTolerance(self.tolerance))
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: 10_000_000,
            max_halvings: 128,
        }
    }
}
