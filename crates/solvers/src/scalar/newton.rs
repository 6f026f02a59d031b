//! Newton-Raphson iteration for a scalar equation.
//!
//! Each iteration moves `x` to `x - f(x) / f'(x)` and converges once the step
//! length `|x_next - x|` falls below the tolerance, reporting `x_next`.
//!
//! A derivative of exactly zero leaves the step undefined and is fatal. A step
//! that overflows or produces NaN is reported as [`Error::NonFiniteStep`].
//!
//! By default a spent budget returns the last iterate with
//! [`Status::MaxIters`]; set [`OnMaxIters::Fail`] to get
//! [`Error::NonConvergence`] instead.

mod error;
mod record;

pub use error::Error;
pub use record::Record;

use log::{debug, trace};
use nullpoint_core::{Equation, Observer};

use crate::{Action, Config, OnMaxIters, Status, trace::Trace};

use super::Solution;

/// Iteration budget used when the config leaves it unset.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Exhaustion policy used when the config leaves it unset.
pub const DEFAULT_ON_MAX_ITERS: OnMaxIters = OnMaxIters::ReturnEstimate;

/// Finds a root of `equation` by Newton iteration from `initial_guess`.
///
/// The observer sees one [`Record`] per iteration, before the iterate
/// advances. Returning [`Action::StopEarly`] reports the record's `next`.
///
/// # Errors
///
/// Returns an error if the guess is not finite, if the derivative vanishes
/// at an iterate, if a step is not finite, or if the budget is spent under
/// [`OnMaxIters::Fail`].
pub fn solve<E, Obs>(
    equation: &E,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    E: Equation + ?Sized,
    Obs: Observer<Record, Action>,
{
    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess(initial_guess));
    }

    let tolerance = config.tolerance();
    let max_iters = config.max_iters_or(DEFAULT_MAX_ITERS);
    let mut records = Trace::new(config.records_trace());
    let mut x = initial_guess;

    for iter in 1..=max_iters {
        let value = equation.value(x);
        let derivative = equation.derivative(x);
        if derivative == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let next = x - value / derivative;
        if !next.is_finite() {
            return Err(Error::NonFiniteStep { x });
        }

        let record = Record {
            iter,
            x,
            value,
            derivative,
            next,
        };
        trace!("newton {iter}: x = {x}, f = {value}, df = {derivative}");

        let action = observer.observe(&record);
        records.push(record);

        let status = if let Some(Action::StopEarly) = action {
            Some(Status::StoppedByObserver)
        } else if record.step() < tolerance {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            debug!("newton finished at {next} after {iter} iterations: {status:?}");
            return Ok(Solution {
                status,
                x: next,
                residual: equation.value(next),
                iters: iter,
                trace: records.into_records(),
            });
        }

        x = next;
    }

    debug!("newton spent {max_iters} iterations, estimate {x}");

    match config.on_max_iters_or(DEFAULT_ON_MAX_ITERS) {
        OnMaxIters::ReturnEstimate => Ok(Solution {
            status: Status::MaxIters,
            x,
            residual: equation.value(x),
            iters: max_iters,
            trace: records.into_records(),
        }),
        OnMaxIters::Fail => Err(Error::NonConvergence {
            iters: max_iters,
            estimate: x,
        }),
    }
}

/// Finds a root of `equation` by Newton iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<E>(
    equation: &E,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    E: Equation + ?Sized,
{
    solve(equation, initial_guess, config, ())
}
