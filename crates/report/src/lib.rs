//! Reporting adapters for nullpoint solver traces.
//!
//! # Modules
//!
//! - [`latex`]: renders a trace as a LaTeX `tabular`
//! - [`format`]: fixed and scientific number formatting used in the tables
//! - [`traits`]: capability traits over iteration records, plus the
//!   [`ResidualBelow`](traits::ResidualBelow) observer built on them

pub mod format;
pub mod latex;
pub mod traits;
