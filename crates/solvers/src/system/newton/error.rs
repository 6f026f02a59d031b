use nalgebra::DVector;
use thiserror::Error;

/// Errors that can occur during system Newton iteration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("initial guess is empty")]
    EmptyGuess,

    #[error("initial guess has a non-finite component at index {index}")]
    NonFiniteGuess { index: usize },

    #[error(
        "expected a residual of length {expected} and a {expected}x{expected} Jacobian, \
         got {residual_len} and {}x{}",
        .jacobian_shape.0,
        .jacobian_shape.1
    )]
    DimensionMismatch {
        expected: usize,
        residual_len: usize,
        jacobian_shape: (usize, usize),
    },

    #[error("residual is not finite at iteration {iter}")]
    NonFiniteResidual { iter: usize },

    #[error("Jacobian is singular at iteration {iter}")]
    SingularJacobian { iter: usize },

    #[error("no convergence after {iters} iterations")]
    NonConvergence { iters: usize, estimate: DVector<f64> },
}
