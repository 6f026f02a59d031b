use nalgebra::DVector;

/// State of one system Newton iteration.
///
/// `x` is an owned copy of the iterate the step was computed from. On
/// convergence a final record repeats the iteration number and norms with
/// `x` set to the updated iterate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Iterate snapshot.
    pub x: DVector<f64>,

    /// Euclidean norm of the Newton step `Δx`.
    pub step_norm: f64,

    /// Euclidean norm of the residual the step was computed from.
    pub residual_norm: f64,
}
