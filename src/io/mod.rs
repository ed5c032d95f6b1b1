//! I/O utilities for romcalc.
//!
//! Reading the expression line and writing the interactive prompt.

pub mod reader;

pub use reader::{PROMPT, read_expression, write_prompt};
