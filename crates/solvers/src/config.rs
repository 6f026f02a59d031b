use thiserror::Error;

/// What a solver does when it runs out of iterations without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OnMaxIters {
    /// Return the current estimate with [`Status::MaxIters`](crate::Status::MaxIters).
    ReturnEstimate,

    /// Return a `NonConvergence` error carrying the current estimate.
    Fail,
}

/// Errors that can occur when building a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

/// Configuration shared by every solver.
///
/// Unset options fall back to a per-method default, so one `Config` can be
/// passed to several methods of the same finder:
///
/// ```
/// use nullpoint_solvers::{Config, OnMaxIters};
///
/// let config = Config::new(1e-8)?
///     .max_iters(50)?
///     .record_trace()
///     .on_max_iters(OnMaxIters::Fail);
///
/// assert_eq!(config.max_iters_or(1000), 50);
/// assert!(config.records_trace());
/// # Ok::<(), nullpoint_solvers::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    tolerance: f64,
    max_iters: Option<usize>,
    record_trace: bool,
    on_max_iters: Option<OnMaxIters>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: None,
            record_trace: false,
            on_max_iters: None,
        }
    }
}

impl Config {
    /// Creates a config with the given convergence tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(tolerance));
        }

        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Sets the iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters: Some(max_iters),
            ..self
        })
    }

    /// Requests that every iteration record be kept in the solution's trace.
    #[must_use]
    pub fn record_trace(self) -> Self {
        Self {
            record_trace: true,
            ..self
        }
    }

    /// Overrides the method's default behavior on budget exhaustion.
    #[must_use]
    pub fn on_max_iters(self, policy: OnMaxIters) -> Self {
        Self {
            on_max_iters: Some(policy),
            ..self
        }
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the configured iteration budget, or `default` if unset.
    #[must_use]
    pub fn max_iters_or(&self, default: usize) -> usize {
        self.max_iters.unwrap_or(default)
    }

    /// Returns true if iteration records should be kept.
    #[must_use]
    pub fn records_trace(&self) -> bool {
        self.record_trace
    }

    /// Returns the configured exhaustion policy, or `default` if unset.
    #[must_use]
    pub fn on_max_iters_or(&self, default: OnMaxIters) -> OnMaxIters {
        self.on_max_iters.unwrap_or(default)
    }
}
