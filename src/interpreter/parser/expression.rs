use crate::{
    ast::{BinaryOperator, Expression},
    interpreter::parser::fact::parse_fact,
};

/// Parses an expression: exactly two facts joined by one binary operator.
///
/// The operator must follow the first fact immediately; no whitespace is
/// tolerated anywhere. All three steps must succeed in sequence, and any
/// failure discards the whole attempt. There is no chaining: for `a+b+c`
/// only `a+b` can match, and the trailing `+c` is left for the caller to
/// reject.
///
/// Grammar: `expression := fact ("+" | "-" | "*") fact`
///
/// # Parameters
/// - `text`: The input to parse, anchored at position 0.
///
/// # Returns
/// - `Some((expression, consumed))`: The parsed expression and the number of
///   characters it covers.
/// - `None`: If any step fails; no partial expression is ever returned.
#[must_use]
pub fn parse_expression(text: &str) -> Option<(Expression, usize)> {
    let (left, left_len) = parse_fact(text)?;
    let rest = &text[left_len..];

    let op = match rest.chars().next()? {
        '+' => BinaryOperator::Add,
        '-' => BinaryOperator::Sub,
        '*' => BinaryOperator::Mul,
        _ => return None,
    };

    let (right, right_len) = parse_fact(&rest[1..])?;

    Some((Expression { left, op, right }, left_len + 1 + right_len))
}
