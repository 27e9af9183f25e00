use crate::interpreter::operator::{BinaryOperator, Operator};

/// How an incoming operator relates to the operator on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// The stack top binds looser: push the incoming operator.
    LowerThan,
    /// The stack top pairs with the incoming operator (`(` with `)`, or the
    /// sentinel with the terminator): pop it and move on.
    EqualTo,
    /// The stack top binds tighter: fold it before looking at the incoming
    /// operator again.
    HigherThan,
}

/// Compares the operator on top of the stack against an incoming operator.
///
/// The incoming operator selects the rule; the stack top narrows it down.
///
/// | incoming   | stack top                      | relation     |
/// |------------|--------------------------------|--------------|
/// | `+ -`      | `(` or `=`                     | `LowerThan`  |
/// | `+ -`      | anything else                  | `HigherThan` |
/// | `* /`      | `*`, `/`, `)` or a sign        | `HigherThan` |
/// | `* /`      | anything else                  | `LowerThan`  |
/// | sign       | anything                       | `LowerThan`  |
/// | `(`        | `)`                            | fails        |
/// | `(`        | anything else                  | `LowerThan`  |
/// | `)`        | `(`                            | `EqualTo`    |
/// | `)`        | `=`                            | fails        |
/// | `)`        | anything else                  | `HigherThan` |
/// | `=`        | `=`                            | `EqualTo`    |
/// | `=`        | `(`                            | fails        |
/// | `=`        | anything else                  | `HigherThan` |
///
/// # Returns
/// - `Some(Precedence)`: The relation between the two operators.
/// - `None`: The pair can never occur in a well-formed expression (an
///   unmatched `)`, an unclosed `(`, or a `(` right after a `)`).
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     operator::{BinaryOperator, Operator},
///     precedence::{Precedence, compare},
/// };
///
/// let add = Operator::Binary(BinaryOperator::Add);
/// let mul = Operator::Binary(BinaryOperator::Mul);
///
/// assert_eq!(compare(add, mul), Some(Precedence::LowerThan));
/// assert_eq!(compare(mul, add), Some(Precedence::HigherThan));
/// assert_eq!(compare(Operator::OpenParen, Operator::CloseParen),
///            Some(Precedence::EqualTo));
/// assert_eq!(compare(Operator::Terminator, Operator::CloseParen), None);
/// ```
#[must_use]
pub const fn compare(top: Operator, incoming: Operator) -> Option<Precedence> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Operator::{Binary, CloseParen, OpenParen, Prefix, Terminator};
    use Precedence::{EqualTo, HigherThan, LowerThan};

    let relation = match incoming {
        Binary(Add | Sub) => match top {
            OpenParen | Terminator => LowerThan,
            _ => HigherThan,
        },
        Binary(Mul | Div) => match top {
            Binary(Mul | Div) | CloseParen | Prefix(_) => HigherThan,
            _ => LowerThan,
        },
        Prefix(_) => LowerThan,
        OpenParen => match top {
            CloseParen => return None,
            _ => LowerThan,
        },
        CloseParen => match top {
            OpenParen => EqualTo,
            Terminator => return None,
            _ => HigherThan,
        },
        Terminator => match top {
            Terminator => EqualTo,
            OpenParen => return None,
            _ => HigherThan,
        },
    };

    Some(relation)
}
