/// State of one Newton iteration, captured before the iterate advances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Derivative at `x`.
    pub derivative: f64,

    /// Next iterate, `x - value / derivative`.
    pub next: f64,
}

impl Record {
    /// Returns the length of the Newton step taken from this record.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.next - self.x).abs()
    }
}
