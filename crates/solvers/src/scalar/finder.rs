use nullpoint_core::{Equation, Interval, IntervalError, Observer};

use crate::{Action, Config};

use super::{
    Solution,
    bisection::{self, Record as BisectionRecord},
    fixed_point::{self, Record as FixedPointRecord, Relaxation},
    newton::{self, Record as NewtonRecord},
};

/// An equation bound to a search interval.
///
/// The finder holds no per-run state, so any method may be run any number of
/// times and in any order. Newton and fixed-point iteration start from the
/// interval midpoint unless an initial guess is given.
///
/// ```
/// use nullpoint_solvers::{Config, Status, scalar::ScalarRootFinder};
///
/// let finder = ScalarRootFinder::new((|x: f64| x * x - 2.0, |x: f64| 2.0 * x), 0.0, 2.0)?;
/// let config = Config::new(1e-10)?;
///
/// let bisection = finder.bisection(&config)?;
/// let newton = finder.newton(None, &config)?;
///
/// assert_eq!(bisection.status, Status::Converged);
/// assert!((bisection.x - newton.x).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScalarRootFinder<E> {
    equation: E,
    interval: Interval,
}

impl<E: Equation> ScalarRootFinder<E> {
    /// Binds `equation` to the interval `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are not finite or `lower >= upper`.
    pub fn new(equation: E, lower: f64, upper: f64) -> Result<Self, IntervalError> {
        let interval = Interval::new(lower, upper)?;
        Ok(Self::with_interval(equation, interval))
    }

    /// Binds `equation` to an already validated interval.
    pub fn with_interval(equation: E, interval: Interval) -> Self {
        Self { equation, interval }
    }

    /// Returns the equation.
    pub fn equation(&self) -> &E {
        &self.equation
    }

    /// Returns the search interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Runs bisection on the interval.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection(&self, config: &Config) -> Result<Solution<BisectionRecord>, bisection::Error> {
        self.bisection_with(config, ())
    }

    /// Runs bisection on the interval with an observer.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection_with<Obs>(
        &self,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<BisectionRecord>, bisection::Error>
    where
        Obs: Observer<BisectionRecord, Action>,
    {
        bisection::solve(|x| self.equation.value(x), &self.interval, config, observer)
    }

    /// Runs Newton iteration from `initial_guess`, or the interval midpoint.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton(
        &self,
        initial_guess: Option<f64>,
        config: &Config,
    ) -> Result<Solution<NewtonRecord>, newton::Error> {
        self.newton_with(initial_guess, config, ())
    }

    /// Runs Newton iteration with an observer.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton_with<Obs>(
        &self,
        initial_guess: Option<f64>,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<NewtonRecord>, newton::Error>
    where
        Obs: Observer<NewtonRecord, Action>,
    {
        let x0 = self.initial_guess(initial_guess);
        newton::solve(&self.equation, x0, config, observer)
    }

    /// Runs fixed-point iteration from `initial_guess`, or the interval midpoint.
    ///
    /// # Errors
    ///
    /// See [`fixed_point::solve`].
    pub fn fixed_point(
        &self,
        initial_guess: Option<f64>,
        config: &Config,
    ) -> Result<Solution<FixedPointRecord>, fixed_point::Error> {
        self.fixed_point_with(initial_guess, config, ())
    }

    /// Runs fixed-point iteration with an observer.
    ///
    /// # Errors
    ///
    /// See [`fixed_point::solve`].
    pub fn fixed_point_with<Obs>(
        &self,
        initial_guess: Option<f64>,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<FixedPointRecord>, fixed_point::Error>
    where
        Obs: Observer<FixedPointRecord, Action>,
    {
        let x0 = self.initial_guess(initial_guess);
        fixed_point::solve(&self.equation, &self.interval, x0, config, observer)
    }

    /// Returns the relaxation fixed-point iteration would use on this interval.
    ///
    /// # Errors
    ///
    /// See [`Relaxation::from_interval`].
    pub fn relaxation(&self) -> Result<Relaxation, fixed_point::Error> {
        Relaxation::from_interval(&self.equation, &self.interval)
    }

    fn initial_guess(&self, initial_guess: Option<f64>) -> f64 {
        initial_guess.unwrap_or_else(|| self.interval.midpoint())
    }
}
