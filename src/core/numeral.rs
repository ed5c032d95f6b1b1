//! Numeral systems and token classification.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Letters a Roman numeral may be built from.
const ROMAN_LETTERS: &str = "IVXLCDM";

/// The numeral system an operand is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// Decimal digit string, e.g. `7`.
    Arabic,
    /// Letter-encoded numeral, e.g. `VII`.
    Roman,
}

impl NumeralSystem {
    /// Classifies a token by its syntax alone.
    ///
    /// A token made only of the letters `I V X L C D M` (in either case) is
    /// Roman. Otherwise a token that parses as a base-10 integer is Arabic.
    /// Whether a Roman token is well formed is checked later, when it is
    /// decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if the token is neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use romcalc::core::NumeralSystem;
    ///
    /// assert_eq!(NumeralSystem::classify("iv").unwrap(), NumeralSystem::Roman);
    /// assert_eq!(NumeralSystem::classify("4").unwrap(), NumeralSystem::Arabic);
    /// assert!(NumeralSystem::classify("4x").is_err());
    /// ```
    pub fn classify(token: &str) -> Result<Self> {
        if is_roman_syntax(token) {
            Ok(Self::Roman)
        } else if token.parse::<i64>().is_ok() {
            Ok(Self::Arabic)
        } else {
            Err(Error::InvalidOperand {
                token: token.to_string(),
            })
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => f.write_str("Arabic"),
            Self::Roman => f.write_str("Roman"),
        }
    }
}

/// Position of an operand in the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The operand before the operator.
    Left,
    /// The operand after the operator.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

fn is_roman_syntax(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| ROMAN_LETTERS.contains(c.to_ascii_uppercase()))
}
