//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;

/// romcalc: evaluate one Arabic (1-10) or Roman (I-X) expression.
///
/// The expression has the form `<operand> <operator> <operand>` with the
/// operator one of `+ - * /`. Both operands must use the same numeral
/// system; the result is printed in that system.
#[derive(Parser, Debug)]
#[command(name = "romcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Expression words, e.g. `X - I`.
    ///
    /// Words are joined with single spaces. When omitted, one line is read
    /// from standard input.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub expression: Vec<String>,

    /// Output format (text, json).
    #[arg(long, default_value = "text", env = "ROMCALC_FORMAT")]
    pub format: String,

    /// Print the input expression before the result.
    #[arg(short, long)]
    pub echo: bool,

    /// Log each pipeline stage to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the expression given on the command line, if any.
    #[must_use]
    pub fn expression_arg(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }
}
