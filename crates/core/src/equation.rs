/// A scalar equation `f(x) = 0` together with its first derivative.
///
/// Both maps must be pure: solvers call them any number of times and in any
/// order. A pair of closures `(f, df)` is an `Equation`:
///
/// ```
/// use nullpoint_core::Equation;
///
/// let parabola = (|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(parabola.value(3.0), 7.0);
/// assert_eq!(parabola.derivative(3.0), 6.0);
/// ```
pub trait Equation {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

impl<F, D> Equation for (F, D)
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.1)(x)
    }
}

impl<E: Equation + ?Sized> Equation for &E {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// f(x) = x³ + 2.84x² − 5.606x − 14.766
    struct Cubic;

    impl Equation for Cubic {
        fn value(&self, x: f64) -> f64 {
            x.powi(3) + 2.84 * x.powi(2) - 5.606 * x - 14.766
        }

        fn derivative(&self, x: f64) -> f64 {
            3.0 * x.powi(2) + 5.68 * x - 5.606
        }
    }

    fn value_at<E: Equation>(equation: E, x: f64) -> f64 {
        equation.value(x)
    }

    #[test]
    fn struct_equation() {
        assert_relative_eq!(Cubic.value(1.0), -16.532, epsilon = 1e-12);
        assert_relative_eq!(Cubic.derivative(1.0), 3.074, epsilon = 1e-12);
    }

    #[test]
    fn borrowed_equation_forwards() {
        let cubic = Cubic;
        assert_relative_eq!(value_at(&cubic, 3.0), cubic.value(3.0));
    }

    #[test]
    fn function_pointer_pair() {
        fn f(x: f64) -> f64 {
            x.cos() - x
        }
        fn df(x: f64) -> f64 {
            -x.sin() - 1.0
        }

        let pair: (fn(f64) -> f64, fn(f64) -> f64) = (f, df);
        assert_relative_eq!(pair.value(0.0), 1.0);
        assert_relative_eq!(pair.derivative(0.0), -1.0);
    }
}
