//! Operand resolution and validation.

use crate::core::expression::Operator;
use crate::core::numeral::{NumeralSystem, Side};
use crate::core::roman::roman_to_arabic;
use crate::error::{Error, Result};
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

/// Inclusive range every operand must fall in.
pub const OPERAND_RANGE: RangeInclusive<i64> = 1..=10;

/// Two validated operands sharing one numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedOperands {
    /// Value of the left operand, in `1..=10`.
    pub left: i64,
    /// Value of the right operand, in `1..=10`.
    pub right: i64,
    /// Numeral system both operands are written in.
    pub system: NumeralSystem,
}

/// Resolves two operand tokens into validated integers.
///
/// Checks run in this order and stop at the first failure:
///
/// 1. each token is classified as Arabic or Roman;
/// 2. both tokens must use the same numeral system;
/// 3. Roman tokens are decoded;
/// 4. under division, a zero right operand is rejected;
/// 5. both values must lie in `1..=10`.
///
/// # Errors
///
/// [`Error::InvalidOperand`], [`Error::MixedNumeralSystem`],
/// [`Error::DivisionByZero`] or [`Error::OperandRange`].
///
/// # Examples
///
/// ```
/// use romcalc::core::{NumeralSystem, Operator, resolve_operands};
///
/// let ops = resolve_operands("X", "I", Operator::Sub).unwrap();
/// assert_eq!((ops.left, ops.right, ops.system), (10, 1, NumeralSystem::Roman));
/// ```
pub fn resolve_operands(left: &str, right: &str, operator: Operator) -> Result<ResolvedOperands> {
    let left_system = NumeralSystem::classify(left)?;
    let right_system = NumeralSystem::classify(right)?;
    debug!(%left_system, %right_system, "classified operands");

    if left_system != right_system {
        return Err(Error::MixedNumeralSystem);
    }
    let system = left_system;

    let left_value = decode(left, system)?;
    let right_value = decode(right, system)?;

    if operator == Operator::Div && right_value == 0 {
        return Err(Error::DivisionByZero);
    }

    check_range(left_value, Side::Left, system)?;
    check_range(right_value, Side::Right, system)?;

    debug!(left = left_value, right = right_value, %system, "resolved operands");
    Ok(ResolvedOperands {
        left: left_value,
        right: right_value,
        system,
    })
}

fn decode(token: &str, system: NumeralSystem) -> Result<i64> {
    match system {
        NumeralSystem::Roman => roman_to_arabic(token),
        NumeralSystem::Arabic => token.parse().map_err(|_| Error::InvalidOperand {
            token: token.to_string(),
        }),
    }
}

fn check_range(value: i64, side: Side, system: NumeralSystem) -> Result<()> {
    if OPERAND_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::OperandRange {
            side,
            system,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_arabic() {
        let ops = resolve_operands("3", "4", Operator::Add).expect("valid operands");
        assert_eq!(
            ops,
            ResolvedOperands {
                left: 3,
                right: 4,
                system: NumeralSystem::Arabic
            }
        );
    }

    #[test]
    fn test_resolve_roman_case_insensitive() {
        let ops = resolve_operands("vi", "II", Operator::Mul).expect("valid operands");
        assert_eq!((ops.left, ops.right), (6, 2));
        assert_eq!(ops.system, NumeralSystem::Roman);
    }

    #[test]
    fn test_mixed_systems_rejected() {
        assert_eq!(
            resolve_operands("V", "3", Operator::Add),
            Err(Error::MixedNumeralSystem)
        );
        assert_eq!(
            resolve_operands("3", "V", Operator::Add),
            Err(Error::MixedNumeralSystem)
        );
    }

    #[test]
    fn test_mixed_check_precedes_roman_decoding() {
        assert_eq!(
            resolve_operands("IIII", "3", Operator::Add),
            Err(Error::MixedNumeralSystem)
        );
    }

    #[test]
    fn test_out_of_range_arabic() {
        assert_eq!(
            resolve_operands("11", "2", Operator::Add),
            Err(Error::OperandRange {
                side: Side::Left,
                system: NumeralSystem::Arabic,
                value: 11
            })
        );
        assert!(matches!(
            resolve_operands("2", "0", Operator::Mul),
            Err(Error::OperandRange {
                side: Side::Right,
                value: 0,
                ..
            })
        ));
        assert!(matches!(
            resolve_operands("-1", "2", Operator::Sub),
            Err(Error::OperandRange {
                side: Side::Left,
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_roman() {
        assert_eq!(
            resolve_operands("XI", "II", Operator::Add),
            Err(Error::OperandRange {
                side: Side::Left,
                system: NumeralSystem::Roman,
                value: 11
            })
        );
        assert!(matches!(
            resolve_operands("II", "XX", Operator::Add),
            Err(Error::OperandRange {
                side: Side::Right,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_roman_rejected() {
        for token in ["IIII", "VV", "IIX"] {
            assert!(
                matches!(
                    resolve_operands(token, "I", Operator::Add),
                    Err(Error::InvalidOperand { .. })
                ),
                "{token}"
            );
        }
    }

    #[test]
    fn test_zero_divisor_rejected_before_range() {
        assert_eq!(
            resolve_operands("5", "0", Operator::Div),
            Err(Error::DivisionByZero)
        );
        // Zero divisor is reported even when the dividend is out of range.
        assert_eq!(
            resolve_operands("50", "0", Operator::Div),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(
            resolve_operands("abc", "1", Operator::Add),
            Err(Error::InvalidOperand {
                token: "abc".to_string()
            })
        );
    }
}
