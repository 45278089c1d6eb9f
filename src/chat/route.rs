//! Classification of a line of user input.
//!
//! Routing is purely lexical. Any line that contains one of the arithmetic
//! keywords anywhere, in any case, takes the local path, so "please add some
//! context" is treated as arithmetic and then rejected by
//! [`parse_arithmetic`]. This is a known limitation.

use thiserror::Error;

/// Exact command that ends the session.
pub const QUIT_COMMAND: &str = "quit";

/// Substrings that send a line down the local arithmetic path.
pub const ARITHMETIC_KEYWORDS: [&str; 4] = ["add", "subtract", "multiply", "divide"];

/// Where a line of input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// End the session.
    Quit,
    /// Compute locally with the calculator.
    Arithmetic,
    /// Hand the line to the agent.
    Delegate,
}

/// Classify an already-trimmed line. Checks run in order: quit, then
/// arithmetic keywords, then delegation.
pub fn classify(line: &str) -> Route {
    if line == QUIT_COMMAND {
        return Route::Quit;
    }
    let lowered = line.to_lowercase();
    if ARITHMETIC_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Route::Arithmetic
    } else {
        Route::Delegate
    }
}

/// A locally computed arithmetic request, e.g. `add 5 and 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticCommand {
    /// First token, lower-cased. Not checked here; the calculator rejects
    /// unknown names.
    pub operation: String,
    pub a: f64,
    pub b: f64,
}

/// Why an arithmetic line could not be turned into a command.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Please provide a valid operation, e.g., 'add 5 and 3'.")]
    Usage,
    #[error("Could not process the numbers. Please enter valid numbers.")]
    InvalidNumbers,
}

/// Parse `<operation> <number> <word> <number> ...`.
///
/// Needs at least four whitespace-separated tokens; tokens 1 and 3 are the
/// operands and token 0 the operation. Anything after token 3 is ignored.
pub fn parse_arithmetic(line: &str) -> Result<ArithmeticCommand, ArithmeticError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(ArithmeticError::Usage);
    }
    let a = tokens[1]
        .parse::<f64>()
        .map_err(|_| ArithmeticError::InvalidNumbers)?;
    let b = tokens[3]
        .parse::<f64>()
        .map_err(|_| ArithmeticError::InvalidNumbers)?;
    Ok(ArithmeticCommand {
        operation: tokens[0].to_lowercase(),
        a,
        b,
    })
}
