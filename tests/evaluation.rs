use assert_matches::assert_matches;
use opcalc::{
    ErrorKind, EvalError, EvalOptions, REFERENCE_STACK_CAPACITY,
    error::StackKind,
    evaluate, evaluate_chars, evaluate_with,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src} failed with {e}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4=", 14.0);
    assert_value("2*3+4=", 10.0);
    assert_value("1+8/4-2=", 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4=", 20.0);
    assert_value("((1+2)*(3+4))/7=", 3.0);
    assert_value("(((5)))=", 5.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("8/2/2=", 2.0);
    assert_value("10-4-3=", 3.0);
    assert_value("2*3/4=", 1.5);
}

#[test]
fn unary_sign_at_start_or_after_open_paren() {
    assert_value("-3+5=", 2.0);
    assert_value("(-3+5)*2=", 4.0);
    assert_value("+4=", 4.0);
    assert_value("-2*3=", -6.0);
    assert_value("2*(-3)=", -6.0);
}

#[test]
fn sign_after_operator_binds_to_next_operand() {
    assert_value("2*-3=", -6.0);
    assert_value("2/-4/2=", -0.25);
    assert_value("2--3=", 5.0);
    assert_value("--3=", 3.0);
    assert_value("2*-(3+4)=", -14.0);
    assert_value("2*+3=", 6.0);
}

#[test]
fn close_paren_ends_an_operand() {
    assert_value("(2)-3=", -1.0);
    assert_value("(1+1)+(2)=", 4.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5=", 4.0);
    assert_value(".5+.5=", 1.0);
    assert_value("3.=", 3.0);
    assert_value("0.25*8=", 2.0);
}

#[test]
fn malformed_literal_keeps_longest_valid_prefix() {
    assert_value("1.5.5*2=", 3.0);
    assert_value(".=", 0.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(evaluate("5/0=").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-5/0=").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0=").unwrap().is_nan());
}

#[test]
fn input_after_terminator_is_never_read() {
    assert_value("1+1=garbage", 2.0);

    let input = "6*7=".chars()
                      .chain(std::iter::from_fn(|| -> Option<char> {
                          panic!("read past the terminator")
                      }));
    assert_eq!(evaluate_chars(input, EvalOptions::default()).unwrap(), 42.0);
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert_matches!(evaluate("(2+3="), Err(EvalError::UnclosedParen { column: 5 }));
    assert_matches!(evaluate("2+3)="), Err(EvalError::UnmatchedCloseParen { column: 4 }));
    assert_kind("((1)=", ErrorKind::Syntax);
    assert_kind(")=", ErrorKind::Syntax);
}

#[test]
fn misplaced_parentheses_are_syntax_errors() {
    assert_matches!(evaluate("(2+3)4="), Err(EvalError::DigitAfterCloseParen { column: 6 }));
    assert_matches!(evaluate("(2+3).5="), Err(EvalError::DigitAfterCloseParen { column: 6 }));
    assert_matches!(evaluate("2(3+4)="), Err(EvalError::MissingOperator { column: 2 }));
    assert_matches!(evaluate("(2)(3)="), Err(EvalError::MissingOperator { column: 4 }));
    assert_matches!(evaluate("()="), Err(EvalError::MissingOperand { column: 2 }));
    assert_matches!(evaluate("(2+)="), Err(EvalError::MissingOperand { column: 4 }));
}

#[test]
fn characters_outside_the_alphabet_are_rejected() {
    assert_matches!(evaluate("2 + 3="),
                    Err(EvalError::InvalidCharacter { found: ' ', column: 2 }));
    assert_matches!(evaluate("2^3="),
                    Err(EvalError::InvalidCharacter { found: '^', column: 2 }));
    assert_kind("1+x=", ErrorKind::Syntax);
}

#[test]
fn missing_terminator_is_a_syntax_error() {
    assert_matches!(evaluate("2+3"), Err(EvalError::UnexpectedEndOfInput { column: 4 }));
    assert_matches!(evaluate(""), Err(EvalError::UnexpectedEndOfInput { column: 1 }));
}

#[test]
fn missing_operands_underflow() {
    assert_matches!(evaluate("="),
                    Err(EvalError::StackUnderflow { stack: StackKind::Operand,
                                                    column: 1 }));
    assert_matches!(evaluate("2+="),
                    Err(EvalError::StackUnderflow { stack: StackKind::Operand,
                                                    column: 3 }));
    assert_kind("*2=", ErrorKind::StackUnderflow);
    assert_kind("2**3=", ErrorKind::StackUnderflow);
}

#[test]
fn bounded_stacks_overflow() {
    let options = EvalOptions::new().with_stack_capacity(2);
    assert_eq!(evaluate_with("1+2=", options).unwrap(), 3.0);
    assert_matches!(evaluate_with("1+2*3=", options),
                    Err(EvalError::StackOverflow { stack:    StackKind::Operator,
                                                   capacity: 2,
                                                   column:   4, }));

    let none = EvalOptions::new().with_stack_capacity(0);
    assert_matches!(evaluate_with("1=", none),
                    Err(EvalError::StackOverflow { capacity: 0, .. }));
}

#[test]
fn reference_capacity_allows_ninety_nine_open_groups() {
    let options = EvalOptions::new().with_stack_capacity(REFERENCE_STACK_CAPACITY);

    let nested = |depth: usize| format!("{}1{}=", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(evaluate_with(&nested(99), options).unwrap(), 1.0);
    assert_eq!(evaluate_with(&nested(100), options).unwrap_err().kind(),
               ErrorKind::StackOverflow);
    assert_eq!(evaluate(&nested(1000)).unwrap(), 1.0);
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["(2+3)*4=", "-3+5=", "(2+3=", "2+="] {
        let first = evaluate(src);
        let second = evaluate(src);
        assert_eq!(first, second, "{src} changed between runs");
    }
}

#[test]
fn errors_render_with_their_column() {
    let err = evaluate("(2+3=").unwrap_err();
    assert_eq!(err.column(), 5);
    assert_eq!(err.to_string(),
               "Error at column 5: Expected closing parenthesis ')' but none found.");

    let err = evaluate("2+=").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 3: The operand stack is empty; the expression is malformed.");
}
