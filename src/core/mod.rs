//! Core calculator pipeline for romcalc.
//!
//! Pure functions with no I/O: tokenizing an expression, classifying and
//! validating operands, Roman numeral conversion, evaluation, and
//! rendering the result.

pub mod calculation;
pub mod expression;
pub mod numeral;
pub mod operands;
pub mod roman;

pub use calculation::{Calculation, calculate_line, render_result};
pub use expression::{Expression, Operator, calculate};
pub use numeral::{NumeralSystem, Side};
pub use operands::{OPERAND_RANGE, ResolvedOperands, resolve_operands};
pub use roman::{arabic_to_roman, roman_to_arabic};
