//! Lexis CLI library.
//!
//! Command implementations and terminal output helpers shared by the
//! `lexis` binary and its integration tests.

pub mod commands;
pub mod output;

pub use commands::Metric;
pub use output::OutputFormat;
