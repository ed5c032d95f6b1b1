//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Calculation;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a successful calculation.
///
/// With `echo` set, text output starts with the expression as it was
/// entered.
#[must_use]
pub fn format_calculation(
    calculation: &Calculation,
    input: &str,
    echo: bool,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            if echo {
                let _ = writeln!(output, "{input}");
            }
            let _ = writeln!(output, "Result: {}", calculation.result);
            output
        }
        OutputFormat::Json => {
            let mut output = format_json(calculation);
            output.push('\n');
            output
        }
    }
}

/// Formats an error for display.
///
/// Text output is the bare message; JSON output wraps the kind, message
/// and exit code so scripts can branch on them.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody<'a> {
                kind: &'a str,
                message: String,
                exit_code: u8,
            }
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: ErrorBody<'a>,
            }
            format_json(&ErrorOutput {
                error: ErrorBody {
                    kind: error.kind(),
                    message: error.to_string(),
                    exit_code: error.exit_code(),
                },
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculate_line;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_calculation_text() {
        let calc = calculate_line("X - I").expect("valid expression");
        let text = format_calculation(&calc, "X - I", false, OutputFormat::Text);
        assert_eq!(text, "Result: IX\n");

        let echoed = format_calculation(&calc, "X  -  I", true, OutputFormat::Text);
        assert_eq!(echoed, "X  -  I\nResult: IX\n");
    }

    #[test]
    fn test_format_calculation_json() {
        let calc = calculate_line("3 * 4").expect("valid expression");
        let json = format_calculation(&calc, "3 * 4", true, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["result"], "12");
        assert_eq!(value["value"], 12);
        assert_eq!(value["system"], "arabic");
    }

    #[test]
    fn test_format_error() {
        let err = Error::DivisionByZero;
        assert_eq!(format_error(&err, OutputFormat::Text), "division by zero");

        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["error"]["kind"], "division_by_zero");
        assert_eq!(value["error"]["exit_code"], 7);
    }
}
