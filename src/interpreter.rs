/// The evaluator module drives the operator-precedence algorithm.
///
/// The evaluator reads one character at a time, keeps an operator stack and an
/// operand stack, and consults the precedence table to decide whether to push
/// an operator, pop a matched pair, or fold a subexpression into a value.
///
/// # Responsibilities
/// - Accumulates numeric literals and commits them to the operand stack.
/// - Injects a zero operand in front of unary signs.
/// - Validates parenthesis placement and reports malformed input.
pub mod evaluator;
/// The lexer module classifies input characters.
///
/// Every character of an expression is either a digit, the decimal point, one
/// of the operators `+ - * / ( )`, or the `=` terminator. Anything else is
/// rejected.
pub mod lexer;
/// Operator types shared by the lexer, the precedence table and the stacks.
pub mod operator;
/// The precedence table.
///
/// A pure function relating the operator on top of the stack to an incoming
/// operator. Its answer decides between push, pop and fold.
pub mod precedence;
/// A LIFO stack with an optional capacity ceiling, used for both operators and
/// operands.
pub mod stack;
