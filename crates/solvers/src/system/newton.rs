//! Newton's method for a square nonlinear system.
//!
//! # Algorithm
//!
//! Each iteration evaluates `F(x)` and `J(x)`, solves `J·Δx = −F` with a dense
//! LU decomposition, and updates `x ← x + Δx`. Convergence is tested after the
//! update: the iteration stops once `‖Δx‖` is below the tolerance and reports
//! the updated x.
//!
//! A Jacobian the LU solve cannot invert, or one that yields a non-finite
//! step, is fatal. No fallback solver is tried.
//!
//! # Trace
//!
//! One [`Record`] is produced per iteration from the pre-update iterate. On
//! convergence one more record repeats the final iteration number and norms
//! with the updated iterate, so the last traced x is the reported root.
//!
//! # Budget exhaustion
//!
//! By default a spent budget is an [`Error::NonConvergence`]. Set
//! [`OnMaxIters::ReturnEstimate`] to get the current iterate with
//! [`Status::MaxIters`] instead.

mod error;
mod record;
mod solution;

pub use error::Error;
pub use record::Record;
pub use solution::Solution;

use log::{debug, trace};
use nalgebra::DVector;
use nullpoint_core::{Observer, System};

use crate::{Action, Config, OnMaxIters, Status, trace::Trace};

/// Iteration budget used when the config leaves it unset.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Exhaustion policy used when the config leaves it unset.
pub const DEFAULT_ON_MAX_ITERS: OnMaxIters = OnMaxIters::Fail;

/// Solves `system` by Newton iteration from `initial_guess`.
///
/// The observer sees each pre-update [`Record`]. Returning
/// [`Action::StopEarly`] applies that record's step and reports the updated
/// iterate with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if the guess is empty or not finite, if the residual or
/// Jacobian has the wrong shape, if the residual is not finite, if the
/// Jacobian is singular, or if the budget is spent under [`OnMaxIters::Fail`].
pub fn solve<S, Obs>(
    system: &S,
    initial_guess: &DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: System + ?Sized,
    Obs: Observer<Record, Action>,
{
    validate_guess(initial_guess.as_slice())?;

    let tolerance = config.tolerance();
    let max_iters = config.max_iters_or(DEFAULT_MAX_ITERS);
    let mut records = Trace::new(config.records_trace());
    let mut x = initial_guess.clone();

    for iter in 1..=max_iters {
        let Step {
            step,
            residual_norm,
        } = newton_step(system, &x, iter)?;

        let step_norm = step.norm();
        let record = Record {
            iter,
            x: x.clone(),
            step_norm,
            residual_norm,
        };
        trace!("system newton {iter}: |dx| = {step_norm}, |F| = {residual_norm}");

        let action = observer.observe(&record);
        records.push(record);

        x += &step;

        let status = if let Some(Action::StopEarly) = action {
            Some(Status::StoppedByObserver)
        } else if step_norm < tolerance {
            records.push(Record {
                iter,
                x: x.clone(),
                step_norm,
                residual_norm,
            });
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            debug!("system newton finished after {iter} iterations: {status:?}");
            let final_residual_norm = system.residual(&x).norm();
            return Ok(Solution {
                status,
                x,
                residual_norm: final_residual_norm,
                iters: iter,
                trace: records.into_records(),
            });
        }
    }

    debug!("system newton spent {max_iters} iterations");

    match config.on_max_iters_or(DEFAULT_ON_MAX_ITERS) {
        OnMaxIters::ReturnEstimate => {
            let residual_norm = system.residual(&x).norm();
            Ok(Solution {
                status: Status::MaxIters,
                x,
                residual_norm,
                iters: max_iters,
                trace: records.into_records(),
            })
        }
        OnMaxIters::Fail => Err(Error::NonConvergence {
            iters: max_iters,
            estimate: x,
        }),
    }
}

/// Solves `system` by Newton iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S>(
    system: &S,
    initial_guess: &DVector<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    S: System + ?Sized,
{
    solve(system, initial_guess, config, ())
}

/// Checks that a guess is non-empty with only finite components.
pub(crate) fn validate_guess(guess: &[f64]) -> Result<(), Error> {
    if guess.is_empty() {
        return Err(Error::EmptyGuess);
    }

    match guess.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteGuess { index }),
        None => Ok(()),
    }
}

struct Step {
    step: DVector<f64>,
    residual_norm: f64,
}

/// Evaluates the system at `x` and solves `J·Δx = −F` for the step.
fn newton_step<S>(system: &S, x: &DVector<f64>, iter: usize) -> Result<Step, Error>
where
    S: System + ?Sized,
{
    let n = x.len();
    let residual = system.residual(x);
    let jacobian = system.jacobian(x);

    if residual.len() != n || jacobian.shape() != (n, n) {
        return Err(Error::DimensionMismatch {
            expected: n,
            residual_len: residual.len(),
            jacobian_shape: jacobian.shape(),
        });
    }

    if residual.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteResidual { iter });
    }

    let residual_norm = residual.norm();
    let step = jacobian
        .lu()
        .solve(&(-residual))
        .filter(|step| step.iter().all(|v| v.is_finite()))
        .ok_or(Error::SingularJacobian { iter })?;

    Ok(Step {
        step,
        residual_norm,
    })
}
