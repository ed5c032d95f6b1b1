//! CLI layer for romcalc.
//!
//! Provides the command-line interface using clap: argument parsing,
//! execution against stdin, and text/JSON output.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with_input};
pub use output::{OutputFormat, format_error};
pub use parser::Cli;
