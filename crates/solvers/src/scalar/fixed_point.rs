//! Relaxed fixed-point iteration for a scalar equation.
//!
//! # Algorithm
//!
//! The equation `f(x) = 0` is rewritten as `x = φ(x) = x + λ·f(x)`, with `λ`
//! derived from the derivatives at the interval endpoints (see
//! [`Relaxation`]). Starting from the initial guess, the iteration repeatedly
//! applies `φ` and converges when both the step length `|x_next - x_prev|` and
//! `|f(x_next)|` are below the tolerance.
//!
//! Convergence is guaranteed when `φ` is a contraction on the interval. If
//! either endpoint derivative has magnitude of at least one, a warning is
//! logged and the iteration runs anyway. The iterates are not confined to the
//! interval and may settle on a root outside it.
//!
//! # Budget exhaustion
//!
//! By default a spent budget is an [`Error::NonConvergence`]. Set
//! [`OnMaxIters::ReturnEstimate`] to get the last iterate with
//! [`Status::MaxIters`] instead.

mod error;
mod record;
mod relaxation;

pub use error::Error;
pub use record::Record;
pub use relaxation::Relaxation;

use log::{debug, trace, warn};
use nullpoint_core::{Equation, Interval, Observer};

use crate::{Action, Config, OnMaxIters, Status, trace::Trace};

use super::Solution;

/// Iteration budget used when the config leaves it unset.
pub const DEFAULT_MAX_ITERS: usize = 1000;

/// Exhaustion policy used when the config leaves it unset.
pub const DEFAULT_ON_MAX_ITERS: OnMaxIters = OnMaxIters::Fail;

/// Finds a fixed point of the relaxed map for `equation` from `initial_guess`.
///
/// The relaxation is derived from `interval`. The observer sees one
/// [`Record`] per iteration; returning [`Action::StopEarly`] reports the
/// record's `x_next`.
///
/// # Errors
///
/// Returns an error if the guess is not finite, if the relaxation cannot be
/// derived, if an iterate is not finite, or if the budget is spent under
/// [`OnMaxIters::Fail`].
pub fn solve<E, Obs>(
    equation: &E,
    interval: &Interval,
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

    let relaxation = Relaxation::from_interval(equation, interval)?;
    if !relaxation.meets_contraction_condition() {
        warn!(
            "contraction condition not met on [{}, {}]: |f'| = {} and {} at the endpoints; \
             convergence is not guaranteed",
            interval.lower(),
            interval.upper(),
            relaxation.df_lower.abs(),
            relaxation.df_upper.abs(),
        );
    }
    debug!(
        "fixed point relaxation: m = {}, lambda = {}, phi'(a) = {}, phi'(b) = {}",
        relaxation.m,
        relaxation.lambda,
        relaxation.phi_prime(relaxation.df_lower),
        relaxation.phi_prime(relaxation.df_upper),
    );

    let tolerance = config.tolerance();
    let max_iters = config.max_iters_or(DEFAULT_MAX_ITERS);
    let mut records = Trace::new(config.records_trace());
    let mut x_prev = initial_guess;

    for iter in 1..=max_iters {
        let x_next = relaxation.apply(x_prev, equation.value(x_prev));
        if !x_next.is_finite() {
            return Err(Error::NonFiniteStep { x: x_prev });
        }

        let value = equation.value(x_next);
        let error = (x_next - x_prev).abs();
        let record = Record {
            iter,
            x_prev,
            x_next,
            value,
            error,
        };
        trace!("fixed point {iter}: {x_prev} -> {x_next}, f = {value}");

        let action = observer.observe(&record);
        records.push(record);

        let status = if let Some(Action::StopEarly) = action {
            Some(Status::StoppedByObserver)
        } else if error < tolerance && value.abs() < tolerance {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            debug!("fixed point finished at {x_next} after {iter} iterations: {status:?}");
            return Ok(Solution {
                status,
                x: x_next,
                residual: value,
                iters: iter,
                trace: records.into_records(),
            });
        }

        x_prev = x_next;
    }

    debug!("fixed point spent {max_iters} iterations, estimate {x_prev}");

    match config.on_max_iters_or(DEFAULT_ON_MAX_ITERS) {
        OnMaxIters::ReturnEstimate => Ok(Solution {
            status: Status::MaxIters,
            x: x_prev,
            residual: equation.value(x_prev),
            iters: max_iters,
            trace: records.into_records(),
        }),
        OnMaxIters::Fail => Err(Error::NonConvergence {
            iters: max_iters,
            estimate: x_prev,
        }),
    }
}

/// Runs fixed-point iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<E>(
    equation: &E,
    interval: &Interval,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    E: Equation + ?Sized,
{
    solve(equation, interval, initial_guess, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use approx::assert_relative_eq;
    use log::{Level, LevelFilter, Log, Metadata};

    /// Keeps every warning logged by any test in this binary.
    struct WarningLog;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static WARNING_LOG: WarningLog = WarningLog;

    impl Log for WarningLog {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut warnings) = WARNINGS.lock() {
                    warnings.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    fn capture_warnings() {
        // Another test may have installed it already.
        let _ = log::set_logger(&WARNING_LOG);
        log::set_max_level(LevelFilter::Warn);
    }

    fn warned_about(interval_text: &str) -> bool {
        WARNINGS
            .lock()
            .expect("warning log lock")
            .iter()
            .any(|message| message.starts_with(interval_text))
    }

    fn cos_minus_x() -> (fn(f64) -> f64, fn(f64) -> f64) {
        (|x| x.cos() - x, |x| -x.sin() - 1.0)
    }

    fn unit() -> Interval {
        Interval::new(0.0, 1.0).expect("valid interval")
    }

    #[test]
    fn converges_on_dottie_number() {
        let solution = solve_unobserved(&cos_minus_x(), &unit(), 0.5, &Config::default())
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 34);
        assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-6);
        assert!(solution.residual.abs() < 1e-6);
    }

    #[test]
    fn records_steps() {
        let config = Config::default().record_trace();
        let solution =
            solve_unobserved(&cos_minus_x(), &unit(), 0.5, &config).expect("should converge");

        // λ = 1 here, so each step is x ← cos(x).
        let first = solution.trace[0];
        assert_relative_eq!(first.x_prev, 0.5);
        assert_relative_eq!(first.x_next, 0.5_f64.cos());
        assert_relative_eq!(first.error, 0.5_f64.cos() - 0.5);

        let last = solution.trace.last().expect("non-empty trace");
        assert!(last.error < 1e-6);
        assert!(last.value.abs() < 1e-6);
    }

    #[test]
    fn exhausted_budget_fails_by_default() {
        let config = Config::default().max_iters(3).expect("valid budget");
        let result = solve_unobserved(&cos_minus_x(), &unit(), 0.5, &config);

        let Err(Error::NonConvergence { iters, estimate }) = result else {
            panic!("expected non-convergence, got {result:?}");
        };
        assert_eq!(iters, 3);
        assert_relative_eq!(estimate, 0.802_685_100_682_334_9, epsilon = 1e-12);
    }

    #[test]
    fn exhausted_budget_can_return_estimate() {
        let config = Config::default()
            .max_iters(3)
            .expect("valid budget")
            .on_max_iters(OnMaxIters::ReturnEstimate);
        let solution =
            solve_unobserved(&cos_minus_x(), &unit(), 0.5, &config).expect("estimate");

        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.x, 0.802_685_100_682_334_9, epsilon = 1e-12);
    }

    #[test]
    fn steep_boundary_slope_logs_a_warning() {
        capture_warnings();

        // f' = 2 at both ends, so the contraction condition fails.
        let line = (|x: f64| 2.0 * x - 21.0, |_: f64| 2.0);
        let interval = Interval::new(10.0, 11.0).expect("valid interval");
        let solution =
            solve_unobserved(&line, &interval, 10.5, &Config::default()).expect("iteration runs");

        assert!(warned_about("contraction condition not met on [10, 11]"));
        assert!((line.0)(solution.x).abs() < 1e-6);
    }

    #[test]
    fn shallow_boundary_slopes_log_nothing() {
        capture_warnings();

        let half_cos = (|x: f64| (x.cos() - x) / 2.0, |x: f64| (-x.sin() - 1.0) / 2.0);
        let interval = Interval::new(0.25, 1.0).expect("valid interval");
        solve_unobserved(&half_cos, &interval, 0.5, &Config::default()).expect("should converge");

        assert!(!warned_about("contraction condition not met on [0.25, 1]"));
    }

    #[test]
    fn zero_boundary_derivative_is_fatal() {
        let flat_at_one = (|x: f64| x * x - 2.0 * x + 0.5, |x: f64| 2.0 * x - 2.0);
        let result = solve_unobserved(&flat_at_one, &unit(), 0.5, &Config::default());
        assert_eq!(result, Err(Error::ZeroDerivative { x: 1.0 }));
    }

    #[test]
    fn divergent_iteration_is_reported() {
        // λ = 1/m is far too large for a steep increasing function.
        let steep = (|x: f64| x.exp(), |x: f64| x.exp() * 1e-3);
        let result = solve_unobserved(&steep, &unit(), 0.5, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteStep { .. })));
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |record: &Record| (record.error < 0.1).then_some(Action::StopEarly);
        let solution = solve(&cos_minus_x(), &unit(), 0.5, &Config::default(), observer)
            .expect("stopped");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.iters < 34);
    }
}
