use nullpoint_core::IntervalError;
use thiserror::Error;

/// Errors that can occur during bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("function is not finite at x = {x}: {value}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("no convergence after {iters} iterations, last estimate {estimate}")]
    NonConvergence { iters: usize, estimate: f64 },
}
