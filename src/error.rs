use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `qwell` library.
///
/// The variants fall into three families. Invalid arguments are rejected before any
/// iteration starts. A domain violation means the eigenvalue iteration left the physical
/// range `0 < r <= 1`. Non-convergence means one of the configured iteration caps was hit.
/// File loading adds the usual I/O and deserialization failures.
#[derive(Error, Debug)]
pub enum QwellError {
    /// The well thickness was zero, negative, or not a finite number.
    #[error("Well thickness must be a positive finite length in meters, got {0}")]
    InvalidThickness(f64),

    /// The effective mass ratio was zero, negative, or not a finite number.
    #[error("Effective mass ratio must be positive and finite, got {0}")]
    InvalidMassRatio(f64),

    /// The potential depth was NaN. Non-positive depths are valid and yield zero energy.
    #[error("Potential depth must be a number, got {0}")]
    InvalidPotential(f64),

    /// The dimensionless well-strength parameter was negative or not finite.
    #[error("Well-strength parameter must be a non-negative finite number, got {0}")]
    InvalidStrength(f64),

    /// The requested quantum number is not a bound state of the well.
    #[error("Quantum number {n} is out of range: the well supports states 1..={max_states}")]
    QuantumNumberOutOfRange {
        /// The requested quantum number.
        n: u32,
        /// The number of bound states the well supports.
        max_states: u32,
    },

    /// A solver option was outside its admissible range.
    #[error("Solver tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),

    /// The iteration produced a normalized momentum outside `0 < r <= 1`.
    ///
    /// The value is reported as-is and is never clamped back into range.
    #[error(
        "Normalized momentum left the physical domain for state {n} at iteration {iteration}: r = {momentum}"
    )]
    DomainViolation {
        /// The quantum number being solved.
        n: u32,
        /// The offending normalized momentum.
        momentum: f64,
        /// The outer iteration at which the violation was detected.
        iteration: u32,
    },

    /// The outer iteration failed to bring the residual below the tolerance within the
    /// maximum number of allowed iterations.
    #[error(
        "Eigenvalue iteration failed to converge after {max_iterations} iterations. Final residual: {residual:.2e}"
    )]
    NotConverged {
        /// The maximum number of iterations that were performed.
        max_iterations: u32,
        /// The residual of the eigen-equation at the last accepted state.
        residual: f64,
    },

    /// The damping search could not find a step that shrinks the residual.
    #[error(
        "Relaxation weight exhausted after {halvings} halvings at iteration {iteration}. Residual: {residual:.2e}"
    )]
    DampingExhausted {
        /// The outer iteration at which the search gave up.
        iteration: u32,
        /// The number of halvings attempted during that search.
        halvings: u32,
        /// The residual of the eigen-equation at the last accepted state.
        residual: f64,
    },

    /// An I/O error that occurred while attempting to read a well-set file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The well-set file was not valid TOML or did not match the expected layout.
    #[error("Failed to deserialize TOML well set: {0}")]
    DeserializationError(#[from] toml::de::Error),

    /// The well-set file did not define any wells.
    #[error("Input validation failed: at least one well is required")]
    EmptyWellSet,
}

impl QwellError {
    /// Returns `true` for errors caused by inputs outside their admissible range.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidThickness(_)
                | Self::InvalidMassRatio(_)
                | Self::InvalidPotential(_)
                | Self::InvalidStrength(_)
                | Self::QuantumNumberOutOfRange { .. }
                | Self::InvalidTolerance(_)
        )
    }

    /// Returns `true` when an iteration cap stopped the solver.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NotConverged { .. } | Self::DampingExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_family() {
        assert!(QwellError::InvalidThickness(-1.0).is_invalid_argument());
        assert!(QwellError::InvalidMassRatio(0.0).is_invalid_argument());
        assert!(
            QwellError::QuantumNumberOutOfRange {
                n: 5,
                max_states: 2
            }
            .is_invalid_argument()
        );
        assert!(
            !QwellError::DomainViolation {
                n: 1,
                momentum: 1.5,
                iteration: 3
            }
            .is_invalid_argument()
        );
    }

    #[test]
    fn test_non_convergence_family() {
        assert!(
            QwellError::NotConverged {
                max_iterations: 10,
                residual: 1e-3
            }
            .is_non_convergence()
        );
        assert!(
            QwellError::DampingExhausted {
                iteration: 2,
                halvings: 128,
                residual: 1e-3
            }
            .is_non_convergence()
        );
        assert!(!QwellError::EmptyWellSet.is_non_convergence());
    }

    #[test]
    fn test_out_of_range_message_names_bounds() {
        let message = QwellError::QuantumNumberOutOfRange {
            n: 4,
            max_states: 3,
        }
        .to_string();
        assert!(message.contains("Quantum number 4"));
        assert!(message.contains("1..=3"));
    }
}
