use nalgebra::DVector;
use nullpoint_core::{Observer, System};

use crate::{Action, Config};

use super::newton::{self, Error, Record, Solution, validate_guess};

/// A nonlinear system bound to an initial guess.
///
/// The guess is copied on construction and never mutated, so repeated runs
/// start from the same point and return the same result.
///
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use nullpoint_solvers::{Config, Status, system::SystemRootFinder};
///
/// let system = (
///     |x: &DVector<f64>| DVector::from_vec(vec![(x[0] - 1.0).cos() + x[1] - 0.5, x[0] - x[1].cos() - 3.0]),
///     |x: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[-(x[0] - 1.0).sin(), 1.0, 1.0, x[1].sin()]),
/// );
///
/// let finder = SystemRootFinder::new(system, &[3.0, 0.9])?;
/// let solution = finder.newton(&Config::default())?;
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!(solution.residual_norm < 1e-6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SystemRootFinder<S> {
    system: S,
    initial_guess: DVector<f64>,
}

impl<S: System> SystemRootFinder<S> {
    /// Binds `system` to a copy of `initial_guess`.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess is empty or has a non-finite component.
    pub fn new(system: S, initial_guess: &[f64]) -> Result<Self, Error> {
        validate_guess(initial_guess)?;
        Ok(Self {
            system,
            initial_guess: DVector::from_column_slice(initial_guess),
        })
    }

    /// Returns the system.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Returns the initial guess.
    pub fn initial_guess(&self) -> &DVector<f64> {
        &self.initial_guess
    }

    /// Runs Newton iteration from the initial guess.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton(&self, config: &Config) -> Result<Solution, Error> {
        self.newton_with(config, ())
    }

    /// Runs Newton iteration with an observer.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton_with<Obs>(&self, config: &Config, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Record, Action>,
    {
        newton::solve(&self.system, &self.initial_guess, config, observer)
    }
}
