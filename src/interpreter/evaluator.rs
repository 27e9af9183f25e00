/// Accumulation of numeric literals.
///
/// Digits and decimal points are collected here until the next operator
/// commits the literal to the operand stack.
pub mod accumulator;
/// Application of a single arithmetic operator.
///
/// The fold step pops one operator and two operands and hands them to
/// [`operate::operate`].
pub mod operate;

use log::{debug, trace};

use crate::{
    error::{EvalError, StackKind},
    interpreter::{
        evaluator::{accumulator::NumberAccumulator, operate::operate},
        lexer::classify,
        operator::Operator,
        precedence::{Precedence, compare},
        stack::Stack,
    },
};

/// Result type used by the evaluator.
///
/// Every evaluation either produces a value of type `T` or stops at the first
/// `EvalError`; there are no partial results.
pub type EvalResult<T> = Result<T, EvalError>;

/// Per-stack capacity of the classic fixed-size implementation of this
/// algorithm. Pass it to [`EvalOptions::with_stack_capacity`] to reproduce its
/// limits.
pub const REFERENCE_STACK_CAPACITY: usize = 100;

/// Settings for a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// The maximum number of entries on each stack, or `None` to let both
    /// stacks grow on demand. The operator stack's sentinel counts towards
    /// the limit.
    pub stack_capacity: Option<usize>,
}

impl EvalOptions {
    /// Creates options with unbounded stacks.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack_capacity: None }
    }

    /// Limits both stacks to `capacity` entries.
    #[must_use]
    pub const fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = Some(capacity);
        self
    }
}

/// What the last processed character was. Decides whether a `+`/`-` is a
/// sign and whether parentheses are placed legally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Start,
    Operand,
    OpenParen,
    CloseParen,
    Operator,
}

/// The operator-precedence evaluation engine.
///
/// An `Evaluator` owns all of the state of one evaluation: the operator stack
/// (bottomed by the `=` sentinel), the operand stack, the literal being read
/// and the classification of the previous character. It is consumed by
/// [`Evaluator::run`], so state never leaks from one expression into the next.
#[derive(Debug)]
pub struct Evaluator {
    operators: Stack<Operator>,
    operands:  Stack<f64>,
    literal:   NumberAccumulator,
    previous:  Previous,
    column:    usize,
}

impl Evaluator {
    /// Creates an evaluator with the terminator sentinel already pushed.
    ///
    /// # Errors
    /// Returns `EvalError::StackOverflow` if `options` limits the stacks to
    /// zero entries, leaving no room for the sentinel.
    pub fn new(options: EvalOptions) -> EvalResult<Self> {
        let mut operators = Stack::new(options.stack_capacity);
        operators.push(Operator::Terminator)
                 .map_err(|e| e.at(StackKind::Operator, 0))?;

        Ok(Self { operators,
                  operands: Stack::new(options.stack_capacity),
                  literal: NumberAccumulator::new(),
                  previous: Previous::Start,
                  column: 0 })
    }

    /// Reads characters until the `=` terminator and returns the value of the
    /// expression.
    ///
    /// Characters after the terminator are never pulled from `input`.
    ///
    /// # Errors
    /// Returns the first `EvalError` encountered: invalid characters, misplaced
    /// or unbalanced parentheses, input ending before `=`, or a stack
    /// violation.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::evaluator::{EvalOptions, Evaluator};
    ///
    /// let evaluator = Evaluator::new(EvalOptions::default()).unwrap();
    /// assert_eq!(evaluator.run("2+3*4=".chars()).unwrap(), 14.0);
    /// ```
    pub fn run<I>(mut self, input: I) -> EvalResult<f64>
        where I: IntoIterator<Item = char>
    {
        for c in input {
            self.column += 1;
            let Some(token) = classify(c) else {
                return Err(EvalError::InvalidCharacter { found:  c,
                                                         column: self.column, });
            };

            match token.to_operator() {
                Some(operator) => {
                    if self.read_operator(operator)? {
                        return self.finish();
                    }
                },
                None => self.read_numeric(c)?,
            }
        }

        Err(EvalError::UnexpectedEndOfInput { column: self.column + 1 })
    }

    fn read_numeric(&mut self, c: char) -> EvalResult<()> {
        if self.previous == Previous::CloseParen {
            return Err(EvalError::DigitAfterCloseParen { column: self.column });
        }
        self.literal.push(c);
        self.previous = Previous::Operand;
        Ok(())
    }

    /// Handles one operator character. Returns `true` once the terminator
    /// meets the sentinel and the expression is fully reduced.
    fn read_operator(&mut self, operator: Operator) -> EvalResult<bool> {
        if let Some(value) = self.literal.take() {
            trace!("column {}: commit literal {value}", self.column);
            self.push_operand(value)?;
        }

        let operator = self.resolve_sign(operator)?;
        self.check_parens(operator)?;

        loop {
            let top = self.peek_operator()?;
            if operator == Operator::Terminator && top == Operator::Terminator {
                return Ok(true);
            }

            match compare(top, operator) {
                Some(Precedence::LowerThan) => {
                    trace!("column {}: push '{operator}' over '{top}'", self.column);
                    self.push_operator(operator)?;
                    break;
                },
                Some(Precedence::EqualTo) => {
                    trace!("column {}: '{operator}' closes '{top}'", self.column);
                    self.pop_operator()?;
                    break;
                },
                Some(Precedence::HigherThan) => self.fold()?,
                None => return Err(self.mismatch(operator)),
            }
        }

        self.previous = match operator {
            Operator::OpenParen => Previous::OpenParen,
            Operator::CloseParen => Previous::CloseParen,
            _ => Previous::Operator,
        };
        Ok(false)
    }

    /// Turns a `+`/`-` with no operand in front of it into a binary operation
    /// on an injected zero.
    fn resolve_sign(&mut self, operator: Operator) -> EvalResult<Operator> {
        let Operator::Binary(op) = operator else {
            return Ok(operator);
        };
        if !op.is_additive() {
            return Ok(operator);
        }

        match self.previous {
            Previous::Operand | Previous::CloseParen => Ok(operator),
            Previous::Start | Previous::OpenParen => {
                self.push_operand(0.0)?;
                Ok(operator)
            },
            Previous::Operator => {
                self.push_operand(0.0)?;
                Ok(Operator::Prefix(op))
            },
        }
    }

    fn check_parens(&self, operator: Operator) -> EvalResult<()> {
        let after_operand = matches!(self.previous, Previous::Operand | Previous::CloseParen);
        match operator {
            Operator::OpenParen if after_operand => {
                Err(EvalError::MissingOperator { column: self.column })
            },
            Operator::CloseParen if !after_operand => {
                Err(EvalError::MissingOperand { column: self.column })
            },
            _ => Ok(()),
        }
    }

    fn mismatch(&self, operator: Operator) -> EvalError {
        let column = self.column;
        match operator {
            Operator::CloseParen => EvalError::UnmatchedCloseParen { column },
            Operator::Terminator => EvalError::UnclosedParen { column },
            _ => EvalError::MissingOperator { column },
        }
    }

    /// Pops one operator and two operands and pushes the result back.
    fn fold(&mut self) -> EvalResult<()> {
        let operator = self.pop_operator()?;
        let right = self.pop_operand()?;
        let left = self.pop_operand()?;
        let Some(op) = operator.arithmetic() else {
            return Err(EvalError::UnexpectedOperator { operator: operator.symbol(),
                                                       column:   self.column, });
        };

        let result = operate(left, op, right);
        trace!("column {}: fold {left} {op} {right} = {result}", self.column);
        self.push_operand(result)
    }

    fn finish(mut self) -> EvalResult<f64> {
        let value = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(EvalError::DanglingOperands { count:  self.operands.len() + 1,
                                                     column: self.column, });
        }
        debug!("expression evaluated to {value} after {} characters", self.column);
        Ok(value)
    }

    fn push_operand(&mut self, value: f64) -> EvalResult<()> {
        let column = self.column;
        self.operands.push(value).map_err(|e| e.at(StackKind::Operand, column))
    }

    fn pop_operand(&mut self) -> EvalResult<f64> {
        let column = self.column;
        self.operands.pop().map_err(|e| e.at(StackKind::Operand, column))
    }

    fn push_operator(&mut self, operator: Operator) -> EvalResult<()> {
        let column = self.column;
        self.operators.push(operator).map_err(|e| e.at(StackKind::Operator, column))
    }

    fn pop_operator(&mut self) -> EvalResult<Operator> {
        let column = self.column;
        self.operators.pop().map_err(|e| e.at(StackKind::Operator, column))
    }

    fn peek_operator(&self) -> EvalResult<Operator> {
        self.operators.peek().map_err(|e| e.at(StackKind::Operator, self.column))
    }
}
