//! Command-line interface module.
//!
//! This module provides the CLI structure and the run handler for the marquee binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_title;
