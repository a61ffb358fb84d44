//! # tally
//!
//! tally is a small integer expression evaluator written in Rust.
//! It reads expressions made of non-negative integers and the operators
//! `+ - * /`, and folds them into an `i64` strictly left to right. There is no
//! operator precedence and there are no parentheses: `10 - 2 * 3` is `24`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Evaluator, lexer::Lexer};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure that can end the evaluation of a line is represented here,
/// together with the byte offset at which it was detected.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, evaluator).
/// - Wraps them in a single [`error::Error`] with a coarse
///   [`error::ErrorCategory`] for callers that only need to classify.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Turns a line of text into a number.
///
/// This module ties together the token definitions, the lexer and the
/// evaluator.
pub mod interpreter;

pub use error::Error;

/// Evaluates a single line and returns its value.
///
/// A fresh lexer and evaluator are built for every call, so a failure on one
/// line never affects the next.
///
/// # Errors
/// Returns an error if the line contains an invalid character, does not match
/// the grammar, divides by zero, or overflows.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("1 + 5 / 2").unwrap(), 3);
/// assert_eq!(evaluate("42").unwrap(), 42);
///
/// // An operator must be followed by an integer.
/// assert!(evaluate("1 + + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    Evaluator::new(Lexer::new(source))?.evaluate()
}

/// Checks that a line is well-formed without evaluating it.
///
/// # Errors
/// Returns an error if the line contains an invalid character or does not
/// match the grammar. Runtime failures such as division by zero are not
/// detected.
///
/// # Examples
/// ```
/// use tally::validate;
///
/// assert!(validate("5 / 0").is_ok());
/// assert!(validate("5 /").is_err());
/// ```
pub fn validate(source: &str) -> Result<(), Error> {
    Evaluator::new(Lexer::new(source))?.validate()
}
