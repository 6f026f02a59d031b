//! Core traits and types for the nullpoint root-finding workspace.
//!
//! This crate defines the problem descriptions that solvers consume and the
//! hook solvers use to report progress:
//!
//! - [`Interval`]: a validated search interval `[lower, upper]`
//! - [`Equation`]: a scalar function together with its derivative
//! - [`System`]: a square system of equations with its Jacobian
//! - [`Observer`]: receives solver events and optionally returns control actions

mod equation;
mod interval;
mod observer;
mod system;

pub use equation::Equation;
pub use interval::{Interval, IntervalError, opposite_signs};
pub use observer::Observer;
pub use system::System;
