/// Control actions an observer can return to any solver in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current estimate.
    StopEarly,
}
