//! # romcalc
//!
//! Evaluates a single `<operand> <operator> <operand>` expression where both
//! operands are Arabic numerals (1-10) or both are Roman numerals (I-X).
//! The result is printed in the numeral system of the operands.
//!
//! ## Pipeline
//!
//! - **Tokenize**: exactly three whitespace-separated tokens, operator one of `+ - * /`
//! - **Resolve**: classify each operand, reject mixed systems, decode Roman, check `1..=10`
//! - **Evaluate**: integer arithmetic, division truncates toward zero
//! - **Render**: Roman results must be positive
//!
//! ```
//! use romcalc::{Error, calculate_line};
//!
//! assert_eq!(calculate_line("V + X").unwrap().result, "XV");
//! assert_eq!(calculate_line("V + 3"), Err(Error::MixedNumeralSystem));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{
    Calculation, Expression, NumeralSystem, Operator, ResolvedOperands, Side, arabic_to_roman,
    calculate, calculate_line, render_result, resolve_operands, roman_to_arabic,
};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
