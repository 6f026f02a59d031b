//! Root finders for a square nonlinear system `F(x) = 0`.

mod finder;

pub mod newton;

pub use finder::SystemRootFinder;
