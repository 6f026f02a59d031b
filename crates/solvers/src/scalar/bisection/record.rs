/// State of one bisection iteration, captured before the interval is narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Left end of the current interval.
    pub left: f64,

    /// Right end of the current interval.
    pub right: f64,

    /// Midpoint of the current interval.
    pub midpoint: f64,

    /// Function value at the midpoint.
    pub value: f64,
}

impl Record {
    /// Returns the half-width of the interval this record was taken on.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }
}
