/// Identifies which of the evaluator's two stacks failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// The stack of pending operators, bottomed by the terminator sentinel.
    Operator,
    /// The stack of pending numeric values.
    Operand,
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator => write!(f, "operator"),
            Self::Operand => write!(f, "operand"),
        }
    }
}

/// The coarse category of an [`EvalError`].
///
/// Every error variant belongs to exactly one of these categories. Callers that
/// only care about "why did it fail" can match on this instead of the detailed
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a well-formed expression.
    Syntax,
    /// A push exceeded a stack's configured capacity.
    StackOverflow,
    /// A pop or peek hit an empty stack.
    StackUnderflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// Found a character outside of digits, `.`, `+ - * / ( )` and `=`.
    InvalidCharacter {
        /// The offending character.
        found:  char,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A `(` directly follows an operand or a `)`.
    MissingOperator {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A `)` directly follows an operator, a `(` or the start of input.
    MissingOperand {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A digit or decimal point directly follows a `)`.
    DigitAfterCloseParen {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A `)` has no matching `(`.
    UnmatchedCloseParen {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// The terminator was reached while a `(` was still open.
    UnclosedParen {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// The input ran out before the `=` terminator.
    UnexpectedEndOfInput {
        /// The column just past the last character read.
        column: usize,
    },
    /// A non-arithmetic operator reached the fold step.
    UnexpectedOperator {
        /// The operator that could not be applied.
        operator: char,
        /// The 1-based column where the error occurred.
        column:   usize,
    },
    /// More than one value was left once the expression was fully reduced.
    DanglingOperands {
        /// How many values were left over.
        count:  usize,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A push exceeded the capacity of a bounded stack.
    StackOverflow {
        /// The stack that was full.
        stack:    StackKind,
        /// The capacity of that stack.
        capacity: usize,
        /// The 1-based column where the error occurred.
        column:   usize,
    },
    /// A pop or peek was attempted on an empty stack. This signals more
    /// operators than operands, as in `2+=`.
    StackUnderflow {
        /// The stack that was empty.
        stack:  StackKind,
        /// The 1-based column where the error occurred.
        column: usize,
    },
}

impl EvalError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::StackOverflow { .. } => ErrorKind::StackOverflow,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            _ => ErrorKind::Syntax,
        }
    }

    /// Returns the 1-based column of the character being processed when the
    /// error was raised.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::InvalidCharacter { column, .. }
            | Self::MissingOperator { column }
            | Self::MissingOperand { column }
            | Self::DigitAfterCloseParen { column }
            | Self::UnmatchedCloseParen { column }
            | Self::UnclosedParen { column }
            | Self::UnexpectedEndOfInput { column }
            | Self::UnexpectedOperator { column, .. }
            | Self::DanglingOperands { column, .. }
            | Self::StackOverflow { column, .. }
            | Self::StackUnderflow { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, column } => {
                write!(f, "Error at column {column}: Invalid character {found:?}.")
            },
            Self::MissingOperator { column } => write!(f,
                                                       "Error at column {column}: Missing operator before '('."),
            Self::MissingOperand { column } => {
                write!(f, "Error at column {column}: Missing operand before ')'.")
            },
            Self::DigitAfterCloseParen { column } => write!(f,
                                                            "Error at column {column}: A number cannot directly follow ')'."),
            Self::UnmatchedCloseParen { column } => write!(f,
                                                           "Error at column {column}: Closing parenthesis ')' has no matching '('."),
            Self::UnclosedParen { column } => write!(f,
                                                     "Error at column {column}: Expected closing parenthesis ')' but none found."),
            Self::UnexpectedEndOfInput { column } => write!(f,
                                                            "Error at column {column}: Unexpected end of input, expected '='."),
            Self::UnexpectedOperator { operator, column } => write!(f,
                                                                    "Error at column {column}: Operator '{operator}' cannot be applied."),
            Self::DanglingOperands { count, column } => write!(f,
                                                               "Error at column {column}: {count} values were left without an operator."),
            Self::StackOverflow { stack,
                                  capacity,
                                  column, } => write!(f,
                                                      "Error at column {column}: The {stack} stack is full (capacity {capacity})."),
            Self::StackUnderflow { stack, column } => write!(f,
                                                             "Error at column {column}: The {stack} stack is empty; the expression is malformed."),
        }
    }
}

impl std::error::Error for EvalError {}
