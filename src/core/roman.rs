//! Roman numeral conversion.
//!
//! Operands are restricted to `I..=X`, so decoding goes through a strict
//! lookup table of the ten canonical spellings first. Anything else is
//! decoded right to left and accepted only if it is the canonical spelling
//! of its value, which lets well-formed numerals such as `XI` reach the
//! range check while `IIII` or `VV` are rejected outright.

use crate::error::{Error, Result};

/// Canonical spellings of 1 through 10, indexed by value - 1.
const OPERAND_TABLE: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Value/symbol pairs for greedy encoding, largest first.
const ENCODE_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Decodes a Roman numeral. Case-insensitive.
///
/// # Errors
///
/// Returns [`Error::InvalidOperand`] for empty input, foreign letters, or
/// a non-canonical spelling such as `IIII`, `VV` or `IC`.
///
/// # Examples
///
/// ```
/// use romcalc::core::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("ix").unwrap(), 9);
/// assert_eq!(roman_to_arabic("XI").unwrap(), 11);
/// assert!(roman_to_arabic("IIII").is_err());
/// ```
pub fn roman_to_arabic(text: &str) -> Result<i64> {
    let upper = text.to_ascii_uppercase();

    if let Some((value, _)) = (1..).zip(OPERAND_TABLE).find(|(_, r)| *r == upper) {
        return Ok(value);
    }

    let invalid = || Error::InvalidOperand {
        token: text.to_string(),
    };

    let value = accumulate(&upper).ok_or_else(invalid)?;
    if value > 0 && arabic_to_roman(value)? == upper {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Encodes a positive integer as an uppercase Roman numeral.
///
/// # Errors
///
/// Returns [`Error::InvalidRomanRange`] if `value` is zero or negative.
///
/// # Examples
///
/// ```
/// use romcalc::core::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(15).unwrap(), "XV");
/// assert!(arabic_to_roman(-8).is_err());
/// ```
pub fn arabic_to_roman(value: i64) -> Result<String> {
    if value <= 0 {
        return Err(Error::InvalidRomanRange { value });
    }

    let mut remaining = value;
    let mut output = String::new();
    for &(step, symbol) in &ENCODE_TABLE {
        while remaining >= step {
            remaining -= step;
            output.push_str(symbol);
        }
    }
    Ok(output)
}

const fn symbol_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Right-to-left additive/subtractive sum. Accepts ill-formed strings.
fn accumulate(upper: &str) -> Option<i64> {
    let mut total: i64 = 0;
    let mut previous = 0;
    for symbol in upper.chars().rev() {
        let value = symbol_value(symbol)?;
        if value >= previous {
            total = total.checked_add(value)?;
        } else {
            total = total.checked_sub(value)?;
        }
        previous = value;
    }
    Some(total)
}
