//! Root finders for a scalar equation `f(x) = 0`.
//!
//! The free functions in [`bisection`], [`newton`] and [`fixed_point`] run a
//! single method. [`ScalarRootFinder`] binds an [`Equation`] to an
//! [`Interval`] once and runs any of them, defaulting the initial guess of the
//! open methods to the interval midpoint.
//!
//! [`Equation`]: nullpoint_core::Equation
//! [`Interval`]: nullpoint_core::Interval

mod finder;
mod solution;

pub mod bisection;
pub mod fixed_point;
pub mod newton;


pub use finder::ScalarRootFinder;
pub use solution::Solution;
