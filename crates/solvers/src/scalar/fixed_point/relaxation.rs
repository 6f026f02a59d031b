use nullpoint_core::{Equation, Interval};

use super::Error;

/// The relaxation that turns `f(x) = 0` into the fixed-point problem
/// `x = φ(x) = x + λ·f(x)`.
///
/// `m` is the larger of the derivatives at the interval endpoints and
/// `λ = -1/m` when `m < 0`, otherwise `1/m`. The endpoint derivatives are kept
/// for the contraction diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Relaxation {
    /// Larger endpoint derivative.
    pub m: f64,

    /// Relaxation factor.
    pub lambda: f64,

    /// Derivative at the lower endpoint.
    pub df_lower: f64,

    /// Derivative at the upper endpoint.
    pub df_upper: f64,
}

impl Relaxation {
    /// Derives the relaxation from the derivatives at the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteDerivative`] if an endpoint derivative is not
    /// finite, or [`Error::ZeroDerivative`] if the larger one is exactly zero.
    pub fn from_interval<E>(equation: &E, interval: &Interval) -> Result<Self, Error>
    where
        E: Equation + ?Sized,
    {
        let [lower, upper] = interval.as_array();

        let df_lower = finite_derivative(equation, lower)?;
        let df_upper = finite_derivative(equation, upper)?;

        let (x, m) = if df_lower >= df_upper {
            (lower, df_lower)
        } else {
            (upper, df_upper)
        };

        if m == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let lambda = if m < 0.0 { -1.0 / m } else { 1.0 / m };

        Ok(Self {
            m,
            lambda,
            df_lower,
            df_upper,
        })
    }

    /// Applies the iteration map `φ(x) = x + λ·f(x)` given `value = f(x)`.
    #[must_use]
    pub fn apply(&self, x: f64, value: f64) -> f64 {
        x + self.lambda * value
    }

    /// Returns `φ'(x) = 1 + λ·f'(x)` given `derivative = f'(x)`.
    #[must_use]
    pub fn phi_prime(&self, derivative: f64) -> f64 {
        1.0 + self.lambda * derivative
    }

    /// Returns true if both endpoint derivatives have magnitude below one.
    ///
    /// Iteration proceeds either way; a false result only means convergence
    /// is not guaranteed.
    #[must_use]
    pub fn meets_contraction_condition(&self) -> bool {
        self.df_lower.abs() < 1.0 && self.df_upper.abs() < 1.0
    }
}

fn finite_derivative<E>(equation: &E, x: f64) -> Result<f64, Error>
where
    E: Equation + ?Sized,
{
    let value = equation.derivative(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteDerivative { x, value })
    }
}
