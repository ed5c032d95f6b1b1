//! The full tokenize, resolve, evaluate and render pipeline.

use crate::core::expression::{Expression, Operator};
use crate::core::numeral::NumeralSystem;
use crate::core::operands::resolve_operands;
use crate::core::roman::arabic_to_roman;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    /// Normalized expression text, e.g. `X - I`.
    pub expression: String,
    /// Value of the left operand.
    pub left: i64,
    /// The operator applied.
    pub operator: Operator,
    /// Value of the right operand.
    pub right: i64,
    /// Numeral system of the operands and the result.
    pub system: NumeralSystem,
    /// Integer result.
    pub value: i64,
    /// Result rendered in `system`.
    pub result: String,
}

/// Renders an integer result in the given numeral system.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRomanRange`] if `system` is Roman and
/// `value` is zero or negative.
pub fn render_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Roman => arabic_to_roman(value),
        NumeralSystem::Arabic => Ok(value.to_string()),
    }
}

/// Evaluates one line of input.
///
/// # Errors
///
/// Fails at the first stage that rejects the input; see [`crate::Error`].
///
/// # Examples
///
/// ```
/// use romcalc::calculate_line;
///
/// assert_eq!(calculate_line("X - I").unwrap().result, "IX");
/// assert_eq!(calculate_line("3 + 4").unwrap().result, "7");
/// assert!(calculate_line("II - X").is_err());
/// ```
pub fn calculate_line(line: &str) -> Result<Calculation> {
    let expression = Expression::parse(line)?;
    debug!(
        left = %expression.left,
        operator = %expression.operator,
        right = %expression.right,
        "tokenized expression"
    );

    let operands = resolve_operands(&expression.left, &expression.right, expression.operator)?;

    let value = expression.operator.apply(operands.left, operands.right)?;
    debug!(value, "evaluated expression");

    let result = render_result(value, operands.system)?;

    Ok(Calculation {
        expression: expression.to_string(),
        left: operands.left,
        operator: expression.operator,
        right: operands.right,
        system: operands.system,
        value,
        result,
    })
}
