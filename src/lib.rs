//! # tally
//!
//! tally evaluates integer arithmetic expressions written with `+ - * / ( )`.
//! A pull-based lexer feeds a recursive-descent parser that computes the value
//! while it parses, with the usual precedence and left-to-right grouping.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::EvalResult,
    interpreter::{lexer::Lexer, parser::Parser},
};

/// Provides the error types for lexing, parsing and evaluation.
///
/// Every failure is one of three kinds: a lexical error for input that cannot
/// be tokenized, a syntax error for tokens the grammar does not allow, and an
/// arithmetic error for a well-formed expression without a value. Each carries
/// the byte offset where it was detected.
pub mod error;
/// Tokenizes and evaluates expressions.
///
/// This module holds the lexer, the parser/evaluator and the settings that
/// steer them.
pub mod interpreter;
/// Line-oriented interactive shell around [`evaluate_with`].
pub mod repl;
/// Numeric helpers shared by the parser and the operators.
pub mod util;

pub use error::EvalError;
pub use interpreter::config::{EvalConfig, TrailingInput};

/// Evaluates an expression with the default [`EvalConfig`].
///
/// Every result is an `f64`. Division is real division, so `7 / 2` is `3.5`.
/// Input after a complete expression is ignored.
///
/// # Errors
/// Returns the first problem found: a lexical, syntax or arithmetic error.
///
/// # Examples
/// ```
/// use tally::{EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("10 / 2 / 5"), Ok(1.0));
///
/// assert!(matches!(evaluate("7 / 0"), Err(EvalError::Arithmetic(_))));
/// assert!(matches!(evaluate("3 + @"), Err(EvalError::Lexical(_))));
/// assert!(matches!(evaluate("(1 + 2"), Err(EvalError::Syntax(_))));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, &EvalConfig::default())
}

/// Evaluates an expression with an explicit configuration.
///
/// A fresh lexer and parser are built for every call, so no state carries
/// over between evaluations.
///
/// # Errors
/// Returns the first problem found: a lexical, syntax or arithmetic error.
pub fn evaluate_with(expression: &str, config: &EvalConfig) -> EvalResult<f64> {
    debug!("evaluating {expression:?}");

    let mut parser = Parser::with_config(Lexer::new(expression), *config)?;
    let result = parser.parse();

    match &result {
        Ok(value) => debug!("{expression:?} = {value}"),
        Err(e) => debug!("{expression:?} failed: {e}"),
    }
    result
}
