/// State of one fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Iterate the step started from.
    pub x_prev: f64,

    /// Iterate the step produced, `φ(x_prev)`.
    pub x_next: f64,

    /// Function value at `x_next`.
    pub value: f64,

    /// Step length `|x_next - x_prev|`.
    pub error: f64,
}
