use thiserror::Error;

/// Errors that can occur during scalar Newton iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {0}")]
    NonFiniteGuess(f64),

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("Newton step from x = {x} is not finite")]
    NonFiniteStep { x: f64 },

    #[error("no convergence after {iters} iterations, last estimate {estimate}")]
    NonConvergence { iters: usize, estimate: f64 },
}
