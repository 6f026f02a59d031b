//! Root finders for scalar equations and small nonlinear systems.
//!
//! # Solvers
//!
//! - [`scalar::bisection`]: guaranteed convergence on a sign-changing interval
//! - [`scalar::newton`]: quadratic convergence from a nearby guess
//! - [`scalar::fixed_point`]: relaxed simple iteration `x ← x + λ·f(x)`
//! - [`system::newton`]: multivariate Newton with a dense LU step
//!
//! Each solver is a free `solve` function taking a [`Config`] and an
//! [`Observer`] that sees every iteration record. The
//! [`ScalarRootFinder`](scalar::ScalarRootFinder) and
//! [`SystemRootFinder`](system::SystemRootFinder) facades hold a problem
//! definition and run any method against it.
//!
//! Iteration records are collected into the returned solution's `trace` when
//! [`Config::record_trace`] is set. A finder never keeps traces between calls,
//! so running a method twice with the same inputs gives the same result.
//!
//! # Running out of iterations
//!
//! What happens when the iteration budget is spent is controlled by
//! [`OnMaxIters`]. Bisection and scalar Newton default to returning their
//! estimate with [`Status::MaxIters`]; fixed-point iteration and system Newton
//! default to a `NonConvergence` error.
//!
//! [`Observer`]: nullpoint_core::Observer

mod action;
mod config;
mod status;
mod trace;

pub mod scalar;
pub mod system;

pub use action::Action;
pub use config::{Config, ConfigError, OnMaxIters};
pub use status::Status;
