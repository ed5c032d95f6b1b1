//! CLI command implementation.
//!
//! Acquires the expression, runs the calculator pipeline and formats the
//! outcome.

use crate::cli::output::{OutputFormat, format_calculation};
use crate::cli::parser::Cli;
use crate::core::calculate_line;
use crate::error::Result;
use crate::io::{read_expression, write_prompt};
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, info};

/// Executes the CLI command against standard input.
///
/// The prompt is written to stderr only when stdin is a terminal, so piped
/// input produces clean output.
///
/// # Errors
///
/// Returns the first error raised by input acquisition or the pipeline.
pub fn execute(cli: &Cli) -> Result<String> {
    let stdin = io::stdin();
    if cli.expression.is_empty() && stdin.is_terminal() {
        write_prompt(io::stderr())?;
    }
    execute_with_input(cli, stdin.lock())
}

/// Executes the CLI command, reading from `input` when no expression was
/// given on the command line.
///
/// # Errors
///
/// Returns the first error raised by input acquisition or the pipeline.
pub fn execute_with_input<R: BufRead>(cli: &Cli, input: R) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    let line = match cli.expression_arg() {
        Some(line) => line,
        None => read_expression(input)?,
    };
    info!(input = %line, "evaluating expression");

    let calculation = calculate_line(&line)?;
    debug!(result = %calculation.result, "calculation complete");

    Ok(format_calculation(&calculation, &line, cli.echo, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_cli(expression: &[&str]) -> Cli {
        Cli {
            expression: expression.iter().map(ToString::to_string).collect(),
            format: "text".to_string(),
            echo: false,
            verbose: false,
        }
    }

    #[test]
    fn test_execute_from_args() {
        let cli = make_cli(&["3", "+", "4"]);
        let output = execute_with_input(&cli, &b""[..]).expect("execute failed");
        assert_eq!(output, "Result: 7\n");
    }

    #[test]
    fn test_execute_from_input() {
        let cli = make_cli(&[]);
        let output = execute_with_input(&cli, &b"X - I\n"[..]).expect("execute failed");
        assert_eq!(output, "Result: IX\n");
    }

    #[test]
    fn test_args_take_precedence_over_input() {
        let cli = make_cli(&["II", "*", "V"]);
        let output = execute_with_input(&cli, &b"1 + 1\n"[..]).expect("execute failed");
        assert_eq!(output, "Result: X\n");
    }

    #[test]
    fn test_execute_echo() {
        let mut cli = make_cli(&[]);
        cli.echo = true;
        let output = execute_with_input(&cli, &b"V + X\n"[..]).expect("execute failed");
        assert_eq!(output, "V + X\nResult: XV\n");
    }

    #[test]
    fn test_execute_json() {
        let mut cli = make_cli(&["10", "/", "3"]);
        cli.format = "json".to_string();
        let output = execute_with_input(&cli, &b""[..]).expect("execute failed");
        assert!(output.contains("\"result\": \"3\""));
    }

    #[test]
    fn test_execute_empty_input() {
        let cli = make_cli(&[]);
        let result = execute_with_input(&cli, &b""[..]);
        assert_eq!(result, Err(Error::Format { tokens: 0 }));
    }

    #[test]
    fn test_execute_propagates_pipeline_error() {
        let cli = make_cli(&["II", "-", "X"]);
        let result = execute_with_input(&cli, &b""[..]);
        assert_eq!(result, Err(Error::InvalidRomanRange { value: -8 }));
    }
}
