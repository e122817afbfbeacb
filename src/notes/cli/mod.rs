//! # CLI
//!
//! The binary is a thin client of the library. This is the only place that
//! touches the real process streams and exit codes.
//!
//! - `setup`: clap argument definitions
//! - `commands`: logging setup, configuration, dispatch
//! - `print`: message rendering on stderr

mod commands;
mod print;
pub mod setup;

pub use commands::run;
