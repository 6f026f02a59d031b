/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Met the method's convergence criterion.
    Converged,

    /// Spent the iteration budget and returned its best estimate.
    ///
    /// Only produced under [`OnMaxIters::ReturnEstimate`](crate::OnMaxIters).
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}
