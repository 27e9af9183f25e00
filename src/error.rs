/// Evaluation errors.
///
/// Defines every error that can end an evaluation: malformed input detected
/// while reading characters, unbalanced parentheses found by the precedence
/// table, and stack violations. Each error carries the column of the character
/// that was being processed.
pub mod eval_error;
/// Stack primitive errors.
///
/// The two failures a bounded stack can raise on its own. The evaluator lifts
/// them into an [`EvalError`] once it knows which stack failed and where.
pub mod stack_error;

pub use eval_error::{ErrorKind, EvalError, StackKind};
pub use stack_error::StackError;
