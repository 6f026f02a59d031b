use thiserror::Error;

/// Errors that can occur when creating an [`Interval`] or using it as a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{lower}, {upper}]")]
    NonFinite { lower: f64, upper: f64 },

    /// The lower endpoint is not strictly below the upper one.
    #[error("interval must satisfy lower < upper, got [{lower}, {upper}]")]
    Empty { lower: f64, upper: f64 },

    /// Function values at the endpoints do not have opposite signs.
    #[error("no sign change: f({lower})={f_lower}, f({upper})={f_upper}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },
}

/// A finite search interval `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Unlike a bracket, the endpoints are never reordered: `lower >= upper`
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if either endpoint is NaN or
    /// infinite, and [`IntervalError::Empty`] if `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite { lower, upper });
        }

        if lower >= upper {
            return Err(IntervalError::Empty { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the interval as `[lower, upper]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint `(lower + upper) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Checks that `f` changes sign strictly across the interval.
    ///
    /// Returns the endpoint values `(f(lower), f(upper))` so a caller can
    /// reuse them instead of evaluating again.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NoSignChange`] if the endpoint values are not
    /// of strictly opposite sign. A zero at either endpoint counts as no sign
    /// change.
    pub fn sign_change<F>(&self, f: F) -> Result<(f64, f64), IntervalError>
    where
        F: Fn(f64) -> f64,
    {
        let f_lower = f(self.lower);
        let f_upper = f(self.upper);

        if opposite_signs(f_lower, f_upper) {
            Ok((f_lower, f_upper))
        } else {
            Err(IntervalError::NoSignChange {
                lower: self.lower,
                upper: self.upper,
                f_lower,
                f_upper,
            })
        }
    }
}

/// Returns true if `a * b < 0` without forming the product.
///
/// Comparing signs directly keeps tiny magnitudes from underflowing to zero.
/// Zero and NaN are never of opposite sign to anything.
#[must_use]
pub fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_endpoints() {
        let interval = Interval::new(1.0, 3.0).expect("valid interval");
        assert_relative_eq!(interval.lower(), 1.0);
        assert_relative_eq!(interval.upper(), 3.0);
        assert_relative_eq!(interval.midpoint(), 2.0);
        assert_relative_eq!(interval.width(), 2.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn rejects_reversed_and_zero_width() {
        assert!(matches!(
            Interval::new(3.0, 1.0),
            Err(IntervalError::Empty { .. })
        ));
        assert!(matches!(
            Interval::new(2.0, 2.0),
            Err(IntervalError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite { .. })
        ));
    }

    #[test]
    fn sign_change_returns_endpoint_values() {
        let interval = Interval::new(0.0, 2.0).expect("valid interval");
        let (f_lower, f_upper) = interval
            .sign_change(|x| x * x - 2.0)
            .expect("sign change");
        assert_relative_eq!(f_lower, -2.0);
        assert_relative_eq!(f_upper, 2.0);
    }

    #[test]
    fn sign_change_rejects_same_sign_and_zero_endpoint() {
        let interval = Interval::new(2.0, 3.0).expect("valid interval");
        assert!(matches!(
            interval.sign_change(|x| x * x - 2.0),
            Err(IntervalError::NoSignChange { .. })
        ));

        let interval = Interval::new(0.0, 1.0).expect("valid interval");
        assert!(matches!(
            interval.sign_change(|x| x),
            Err(IntervalError::NoSignChange { .. })
        ));
    }

    #[test]
    fn opposite_signs_survives_underflow() {
        assert!(opposite_signs(1e-200, -1e-200));
        assert!(opposite_signs(-1.0, 1.0));
        assert!(!opposite_signs(1.0, 1.0));
        assert!(!opposite_signs(0.0, -1.0));
        assert!(!opposite_signs(-0.0, 1.0));
        assert!(!opposite_signs(f64::NAN, 1.0));
    }
}
