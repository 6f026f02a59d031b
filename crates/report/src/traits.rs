//! Capability traits over solver iteration records.
//!
//! Every solver in `nullpoint-solvers` emits its own record type. These traits
//! expose what the records have in common, so a single observer can drive any
//! solver:
//!
//! - [`HasResidual`]: records that carry a residual magnitude
//! - [`HasIteration`]: records that carry an iteration number
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! [`ResidualBelow`] is such an observer.
//!
//! # Example
//!
//! ```rust
//! use nullpoint_core::Observer;
//! use nullpoint_report::traits::{CanStopEarly, HasResidual};
//!
//! struct FirstSmallResidual {
//!     threshold: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for FirstSmallResidual {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use nullpoint_core::Observer;
use nullpoint_solvers::{
    Action,
    scalar::{bisection, fixed_point, newton},
    system,
};

/// A record that carries a residual.
pub trait HasResidual {
    /// Returns the residual for this record.
    ///
    /// Scalar records return the signed function value; system records
    /// return the residual norm.
    fn residual(&self) -> f64;
}

/// A record that carries its iteration number.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for bisection::Record {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasResidual for newton::Record {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasResidual for fixed_point::Record {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasResidual for system::newton::Record {
    fn residual(&self) -> f64 {
        self.residual_norm
    }
}

impl HasIteration for bisection::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for newton::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for fixed_point::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for system::newton::Record {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

/// Stops a solver once the residual magnitude drops below a threshold.
///
/// Records before iteration `min_iters` are never acted on. The observer holds
/// no state, so one value can be copied into several runs.
///
/// ```
/// use nullpoint_report::traits::ResidualBelow;
/// use nullpoint_solvers::{Config, Status, scalar::ScalarRootFinder};
///
/// let finder = ScalarRootFinder::new((|x: f64| x.cos() - x, |x: f64| -x.sin() - 1.0), 0.0, 1.0)?;
/// let solution = finder.bisection_with(&Config::new(1e-12)?, ResidualBelow::new(1e-3))?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.residual.abs() < 1e-3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    threshold: f64,
    min_iters: usize,
}

impl ResidualBelow {
    /// Creates an observer that stops once `|residual| < threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_iters: 1,
        }
    }

    /// Ignores records before iteration `min_iters`.
    #[must_use]
    pub fn min_iters(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E, A> Observer<E, A> for ResidualBelow
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let ready = event.iteration() >= self.min_iters;
        (ready && event.residual().abs() < self.threshold).then(A::stop_early)
    }
}
