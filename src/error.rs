//! Error types for romcalc operations.
//!
//! Every pipeline stage fails fast with one of these variants. The binary
//! maps each variant to its own exit code through [`Error::exit_code`].

use crate::core::{NumeralSystem, Side};
use thiserror::Error;

/// Result type alias for romcalc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for romcalc operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not split into exactly three tokens.
    #[error("invalid input format: expected 'number operator number', got {tokens} token(s)")]
    Format {
        /// Number of whitespace-separated tokens found.
        tokens: usize,
    },

    /// The middle token is not one of `+ - * /`.
    #[error("unsupported operator: {symbol}")]
    UnsupportedOperator {
        /// The symbol that was found.
        symbol: String,
    },

    /// A token is neither an Arabic integer nor a valid Roman numeral.
    #[error("invalid operand: {token}")]
    InvalidOperand {
        /// The offending token.
        token: String,
    },

    /// One operand is Arabic, the other Roman.
    #[error("cannot mix Arabic and Roman numerals")]
    MixedNumeralSystem,

    /// A resolved operand is outside `[1, 10]`.
    #[error("{}", range_message(.side, .system))]
    OperandRange {
        /// Which operand was out of range.
        side: Side,
        /// Numeral system the operand was written in.
        system: NumeralSystem,
        /// The decoded value.
        value: i64,
    },

    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A value to be Roman-encoded is zero or negative.
    #[error("Roman numerals must be positive, got {value}")]
    InvalidRomanRange {
        /// The value that has no Roman representation.
        value: i64,
    },

    /// Integer overflow while evaluating.
    #[error("arithmetic overflow")]
    Overflow,

    /// Reading the expression or writing output failed.
    #[error("input error: {0}")]
    Input(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn range_message(side: &Side, system: &NumeralSystem) -> String {
    match system {
        NumeralSystem::Arabic => {
            format!("{side} operand must be between 1 and 10 inclusive")
        }
        NumeralSystem::Roman => {
            format!("{side} Roman operand must be between I and X inclusive")
        }
    }
}

impl Error {
    /// Stable snake_case name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::UnsupportedOperator { .. } => "unsupported_operator",
            Self::InvalidOperand { .. } => "invalid_operand",
            Self::MixedNumeralSystem => "mixed_numeral_system",
            Self::OperandRange { .. } => "operand_range",
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidRomanRange { .. } => "invalid_roman_range",
            Self::Overflow => "overflow",
            Self::Input(_) => "input",
        }
    }

    /// Process exit code for this error. Never zero.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 1,
            Self::Format { .. } => 2,
            Self::UnsupportedOperator { .. } => 3,
            Self::InvalidOperand { .. } => 4,
            Self::MixedNumeralSystem => 5,
            Self::OperandRange { .. } => 6,
            Self::DivisionByZero => 7,
            Self::InvalidRomanRange { .. } => 8,
            Self::Overflow => 9,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Input(err.to_string())
    }
}
