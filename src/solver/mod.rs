//! This module contains the eigenvalue solver for the finite square well.
//!
//! It includes the `EigenSolver`, which runs the damped fixed-point iteration on the
//! eigen-equation, and `SolverOptions` for configuring its tolerance and iteration caps.

mod implementation;
mod options;

pub use implementation::EigenSolver;
pub use options::SolverOptions;
