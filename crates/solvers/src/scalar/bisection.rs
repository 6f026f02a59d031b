//! Bisection for a scalar equation on a sign-changing interval.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint `c` of the current interval `[a, b]`
//! and keeps the half on which `f` still changes sign. Only `f(a)` is carried
//! between iterations; the right endpoint value is never needed.
//!
//! The search converges when both `|f(c)|` and the half-width `(b - a) / 2`
//! are below the tolerance, and reports `c`. A midpoint where `f` is exactly
//! zero is reported at once, since neither half keeps a strict sign change.
//!
//! # Budget exhaustion
//!
//! By default a spent budget returns the midpoint of the final interval with
//! [`Status::MaxIters`]. Set [`OnMaxIters::Fail`] to get
//! [`Error::NonConvergence`] instead.
//!
//! # Observer
//!
//! The observer sees one [`Record`] per iteration, taken before the interval
//! is narrowed. Returning [`Action::StopEarly`] reports the current midpoint
//! with [`Status::StoppedByObserver`].

mod error;
mod record;

pub use error::Error;
pub use record::Record;

use log::{debug, trace};
use nullpoint_core::{Interval, Observer, opposite_signs};

use crate::{Action, Config, OnMaxIters, Status, trace::Trace};

use super::Solution;

/// Iteration budget used when the config leaves it unset.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Exhaustion policy used when the config leaves it unset.
pub const DEFAULT_ON_MAX_ITERS: OnMaxIters = OnMaxIters::ReturnEstimate;

/// Finds a root of `f` in `interval` by bisection.
///
/// # Errors
///
/// Returns an error if `f` does not change sign strictly across the interval,
/// if `f` is not finite at a midpoint, or if the budget is spent under
/// [`OnMaxIters::Fail`].
pub fn solve<F, Obs>(
    f: F,
    interval: &Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Record, Action>,
{
    let tolerance = config.tolerance();
    let max_iters = config.max_iters_or(DEFAULT_MAX_ITERS);

    let (mut f_left, _) = interval.sign_change(&f)?;
    let [mut left, mut right] = interval.as_array();
    let mut records = Trace::new(config.records_trace());

    for iter in 1..=max_iters {
        let midpoint = (left + right) / 2.0;
        let value = f(midpoint);
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x: midpoint, value });
        }

        let record = Record {
            iter,
            left,
            right,
            midpoint,
            value,
        };
        trace!("bisection {iter}: [{left}, {right}] f({midpoint}) = {value}");

        let action = observer.observe(&record);
        records.push(record);

        if let Some(Action::StopEarly) = action {
            debug!("bisection stopped by observer at iteration {iter}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: midpoint,
                residual: value,
                iters: iter,
                trace: records.into_records(),
            });
        }

        if value == 0.0 || (value.abs() < tolerance && record.half_width() < tolerance) {
            debug!("bisection converged to {midpoint} in {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x: midpoint,
                residual: value,
                iters: iter,
                trace: records.into_records(),
            });
        }

        if opposite_signs(f_left, value) {
            right = midpoint;
        } else {
            left = midpoint;
            f_left = value;
        }
    }

    let estimate = (left + right) / 2.0;
    debug!("bisection spent {max_iters} iterations, estimate {estimate}");

    match config.on_max_iters_or(DEFAULT_ON_MAX_ITERS) {
        OnMaxIters::ReturnEstimate => Ok(Solution {
            status: Status::MaxIters,
            x: estimate,
            residual: f(estimate),
            iters: max_iters,
            trace: records.into_records(),
        }),
        OnMaxIters::Fail => Err(Error::NonConvergence {
            iters: max_iters,
            estimate,
        }),
    }
}

/// Finds a root of `f` in `interval` by bisection without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    f: F,
    interval: &Interval,
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, interval, config, ())
}
