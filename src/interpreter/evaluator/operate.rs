use crate::interpreter::operator::BinaryOperator;

/// Applies an arithmetic operator to two operands.
///
/// Division follows IEEE-754: dividing by zero yields an infinity or NaN
/// rather than an error.
///
/// # Parameters
/// - `left`: The operand popped second.
/// - `op`: The operator popped from the operator stack.
/// - `right`: The operand popped first.
///
/// # Example
/// ```
/// use opcalc::interpreter::{evaluator::operate::operate, operator::BinaryOperator};
///
/// assert_eq!(operate(7.0, BinaryOperator::Sub, 2.0), 5.0);
/// assert_eq!(operate(5.0, BinaryOperator::Div, 0.0), f64::INFINITY);
/// assert!(operate(0.0, BinaryOperator::Div, 0.0).is_nan());
/// ```
#[must_use]
pub fn operate(left: f64, op: BinaryOperator, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
