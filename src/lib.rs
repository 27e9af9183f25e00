//! # opcalc
//!
//! opcalc evaluates arithmetic expressions such as `(2+3)*4=` with the classic
//! operator-precedence algorithm: one stack of pending operators, one stack of
//! pending operands, and a precedence table that decides at every operator
//! whether to push it or to fold what is already on the stacks.
//!
//! Expressions use decimal literals, `+ - * /`, parentheses and unary signs,
//! and end with a single `=`. The result is an `f64`; division by zero follows
//! IEEE-754 and yields an infinity or NaN instead of an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
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

use crate::interpreter::evaluator::Evaluator;

/// Provides the error types raised during evaluation.
///
/// This module defines every way an evaluation can fail. Errors carry the
/// column of the offending character and can be grouped into the three kinds
/// of [`error::ErrorKind`]: syntax errors, stack overflows and stack
/// underflows.
///
/// # Responsibilities
/// - Defines the error enums for the evaluator and the stack primitives.
/// - Attaches column numbers and readable messages.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Implements the operator-precedence evaluator.
///
/// This module ties together character classification, the operator model,
/// the precedence table, the bounded stacks and the driver loop.
///
/// # Responsibilities
/// - Classifies input characters into tokens.
/// - Compares operators through the precedence table.
/// - Drives the push, pop and fold steps until the terminator is reduced.
pub mod interpreter;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::{EvalOptions, EvalResult, REFERENCE_STACK_CAPACITY};

/// Evaluates an expression with unbounded stacks.
///
/// The expression must end with `=`; anything after the first `=` is ignored.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed.
///
/// # Examples
/// ```
/// use opcalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("(2+3)*4=").unwrap(), 20.0);
/// assert_eq!(evaluate("-3+5=").unwrap(), 2.0);
/// assert_eq!(evaluate("5/0=").unwrap(), f64::INFINITY);
///
/// let err = evaluate("(2+3=").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    evaluate_with(source, EvalOptions::default())
}

/// Evaluates an expression with the given options.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed or a bounded stack
/// overflows.
///
/// # Examples
/// ```
/// use opcalc::{ErrorKind, EvalOptions, evaluate_with};
///
/// let options = EvalOptions::new().with_stack_capacity(3);
/// assert_eq!(evaluate_with("1+2=", options).unwrap(), 3.0);
///
/// let err = evaluate_with("((((1))))=", options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::StackOverflow);
/// ```
pub fn evaluate_with(source: &str, options: EvalOptions) -> EvalResult<f64> {
    evaluate_chars(source.chars(), options)
}

/// Evaluates an expression pulled character by character from `input`.
///
/// Reading stops at the `=` terminator, so `input` may be an unbounded source
/// such as a reader over standard input.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is malformed, a bounded stack
/// overflows, or `input` runs out before the terminator.
pub fn evaluate_chars<I>(input: I, options: EvalOptions) -> EvalResult<f64>
    where I: IntoIterator<Item = char>
{
    Evaluator::new(options)?.run(input)
}
