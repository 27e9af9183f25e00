use crate::error::{EvalError, StackKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the failures raised by the stack primitives.
pub enum StackError {
    /// A push was attempted while the stack was at its capacity ceiling.
    Overflow {
        /// The configured capacity of the stack.
        capacity: usize,
    },
    /// A pop or peek was attempted on an empty stack.
    Underflow,
}

impl StackError {
    /// Attaches the failing stack and the current column, producing the
    /// evaluator-level error.
    ///
    /// # Example
    /// ```
    /// use opcalc::error::{ErrorKind, StackError, StackKind};
    ///
    /// let err = StackError::Underflow.at(StackKind::Operand, 4);
    /// assert_eq!(err.kind(), ErrorKind::StackUnderflow);
    /// assert_eq!(err.column(), 4);
    /// ```
    #[must_use]
    pub const fn at(self, stack: StackKind, column: usize) -> EvalError {
        match self {
            Self::Overflow { capacity } => EvalError::StackOverflow { stack,
                                                                      capacity,
                                                                      column },
            Self::Underflow => EvalError::StackUnderflow { stack, column },
        }
    }
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { capacity } => {
                write!(f, "Stack overflow: capacity of {capacity} reached.")
            },
            Self::Underflow => write!(f, "Stack underflow: the stack is empty."),
        }
    }
}

impl std::error::Error for StackError {}
