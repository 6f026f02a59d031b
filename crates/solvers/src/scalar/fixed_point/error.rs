use thiserror::Error;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {0}")]
    NonFiniteGuess(f64),

    #[error("derivative is zero at x = {x}, cannot compute step parameter")]
    ZeroDerivative { x: f64 },

    #[error("derivative is not finite at x = {x}: {value}")]
    NonFiniteDerivative { x: f64, value: f64 },

    #[error("iteration from x = {x} is not finite")]
    NonFiniteStep { x: f64 },

    #[error("no convergence after {iters} iterations, last estimate {estimate}")]
    NonConvergence { iters: usize, estimate: f64 },
}
