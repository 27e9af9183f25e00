use logos::Logos;

use crate::interpreter::operator::{BinaryOperator, Operator};

/// Represents one classified input character.
///
/// The evaluator reads its input one character at a time, so every token is
/// exactly one character wide. Anything the lexer does not recognise,
/// including whitespace, is invalid input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A decimal digit, `0` through `9`.
    #[regex(r"[0-9]", |lex| lex.slice().chars().next())]
    Digit(char),
    /// `.`
    #[token(".")]
    Point,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Maps an operator token onto the operator it denotes. A `+` or `-` is
    /// always mapped to its binary form here; the evaluator decides whether it
    /// acts as a sign.
    ///
    /// # Returns
    /// - `Some(Operator)` for `+ - * / ( ) =`.
    /// - `None` for digits and the decimal point.
    #[must_use]
    pub const fn to_operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Binary(BinaryOperator::Add)),
            Self::Minus => Some(Operator::Binary(BinaryOperator::Sub)),
            Self::Star => Some(Operator::Binary(BinaryOperator::Mul)),
            Self::Slash => Some(Operator::Binary(BinaryOperator::Div)),
            Self::LParen => Some(Operator::OpenParen),
            Self::RParen => Some(Operator::CloseParen),
            Self::Equals => Some(Operator::Terminator),
            Self::Digit(_) | Self::Point => None,
        }
    }
}

/// Classifies a single input character.
///
/// # Returns
/// - `Some(Token)`: The token the character stands for.
/// - `None`: The character is not part of the expression alphabet.
///
/// # Example
/// ```
/// use opcalc::interpreter::lexer::{Token, classify};
///
/// assert_eq!(classify('7'), Some(Token::Digit('7')));
/// assert_eq!(classify('('), Some(Token::LParen));
/// assert_eq!(classify(' '), None);
/// assert_eq!(classify('x'), None);
/// ```
#[must_use]
pub fn classify(c: char) -> Option<Token> {
    let mut buf = [0u8; 4];
    let mut lexer = Token::lexer(c.encode_utf8(&mut buf));

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => Some(token),
        _ => None,
    }
}
