//! Expression tokenizer and operator evaluation.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when dividing by zero and
    /// [`Error::Overflow`] if the result does not fit in an `i64`.
    pub fn apply(self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
            Self::Mul => a.checked_mul(b),
            Self::Div => {
                if b == 0 {
                    return Err(Error::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(Error::Overflow)
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(Error::UnsupportedOperator {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a <operator> b`.
///
/// # Errors
///
/// See [`Operator::apply`].
///
/// # Examples
///
/// ```
/// use romcalc::core::{Operator, calculate};
///
/// assert_eq!(calculate(7, Operator::Div, 2).unwrap(), 3);
/// assert!(calculate(5, Operator::Div, 0).is_err());
/// ```
pub fn calculate(a: i64, operator: Operator, b: i64) -> Result<i64> {
    operator.apply(a, b)
}

/// A tokenized `operand operator operand` expression.
///
/// Operands are kept as text; they are classified and validated by
/// [`crate::core::resolve_operands`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    /// Left operand token.
    pub left: String,
    /// The operator.
    pub operator: Operator,
    /// Right operand token.
    pub right: String,
}

impl Expression {
    /// Splits a line into exactly three whitespace-separated tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when the token count is not three, and
    /// [`Error::UnsupportedOperator`] when the middle token is not one of
    /// `+ - * /`.
    ///
    /// # Examples
    ///
    /// ```
    /// use romcalc::core::{Expression, Operator};
    ///
    /// let expr = Expression::parse("  X   -  I ").unwrap();
    /// assert_eq!(expr.operator, Operator::Sub);
    /// assert_eq!(expr.left, "X");
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [left, operator, right] = tokens.as_slice() else {
            return Err(Error::Format {
                tokens: tokens.len(),
            });
        };

        Ok(Self {
            left: (*left).to_string(),
            operator: operator.parse()?,
            right: (*right).to_string(),
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
