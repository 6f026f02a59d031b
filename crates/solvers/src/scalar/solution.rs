use crate::Status;

/// The result of a scalar root finder.
///
/// `R` is the method's iteration record type. The trace is empty unless
/// [`Config::record_trace`](crate::Config::record_trace) was set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function value at the reported x.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Iteration records, in order.
    pub trace: Vec<R>,
}
