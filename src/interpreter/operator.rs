/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns `true` for `+` and `-`, the operators that may act as a sign.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An entry of the operator stack, or an operator read from the input.
///
/// `Terminator` is the `=` sentinel: it is pushed once at the bottom of the
/// operator stack and also ends the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// An infix arithmetic operator.
    Binary(BinaryOperator),
    /// A `+` or `-` sign written directly after another arithmetic operator,
    /// as in `2*-3`. A zero operand is injected before it, like any unary
    /// sign, but it binds tighter than `*` and `/`.
    Prefix(BinaryOperator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `=`
    Terminator,
}

impl Operator {
    /// Returns the arithmetic operation this entry folds with, or `None` for
    /// parentheses and the terminator.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::operator::{BinaryOperator, Operator};
    ///
    /// assert_eq!(Operator::Prefix(BinaryOperator::Sub).arithmetic(),
    ///            Some(BinaryOperator::Sub));
    /// assert_eq!(Operator::OpenParen.arithmetic(), None);
    /// ```
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Binary(op) | Self::Prefix(op) => Some(op),
            Self::OpenParen | Self::CloseParen | Self::Terminator => None,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Binary(op) | Self::Prefix(op) => op.symbol(),
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Terminator => '=',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
