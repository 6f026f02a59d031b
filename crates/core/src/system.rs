use nalgebra::{DMatrix, DVector};

/// A square nonlinear system `F(x) = 0` with `n` equations in `n` unknowns.
///
/// The residual maps an `n`-vector to an `n`-vector and the Jacobian maps the
/// same vector to the `n × n` matrix of partial derivatives `∂Fᵢ/∂xⱼ`.
/// A pair of closures `(residual, jacobian)` is a `System`:
///
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use nullpoint_core::System;
///
/// let circle = (
///     |x: &DVector<f64>| DVector::from_vec(vec![x[0] * x[0] + x[1] * x[1] - 1.0, x[0] - x[1]]),
///     |x: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[2.0 * x[0], 2.0 * x[1], 1.0, -1.0]),
/// );
///
/// let x = DVector::from_vec(vec![1.0, 0.0]);
/// assert_eq!(circle.residual(&x)[0], 0.0);
/// assert_eq!(circle.jacobian(&x)[(0, 0)], 2.0);
/// ```
pub trait System {
    /// Evaluates the residual vector `F(x)`.
    fn residual(&self, x: &DVector<f64>) -> DVector<f64>;

    /// Evaluates the Jacobian matrix `J(x)`.
    fn jacobian(&self, x: &DVector<f64>) -> DMatrix<f64>;
}

impl<F, J> System for (F, J)
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
    J: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    fn residual(&self, x: &DVector<f64>) -> DVector<f64> {
        (self.0)(x)
    }

    fn jacobian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        (self.1)(x)
    }
}

impl<S: System + ?Sized> System for &S {
    fn residual(&self, x: &DVector<f64>) -> DVector<f64> {
        (**self).residual(x)
    }

    fn jacobian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        (**self).jacobian(x)
    }
}
