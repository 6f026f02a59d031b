use nalgebra::DVector;

use crate::Status;

use super::Record;

/// The result of system Newton iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: DVector<f64>,

    /// Euclidean norm of `F(x)` at the reported x.
    pub residual_norm: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Iteration records, in order.
    pub trace: Vec<Record>,
}
