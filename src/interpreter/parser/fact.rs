use crate::{
    ast::{UnaryOperator, Value},
    interpreter::{
        parser::expression::parse_expression,
        scanner::{scan_identifier, scan_integer},
    },
};

/// Parses a single value-producing term (a "fact").
///
/// Branches are tried in this exact priority order, first success wins:
/// 1. a parenthesized expression,
/// 2. a sign-prefixed fact (`+`/`-`, recursively, one node per sign),
/// 3. an integer literal,
/// 4. an identifier.
///
/// A parenthesized group is closed by the *first* `)` that leaves the group
/// non-empty, not a depth-matched one. Genuinely nested parentheses such as
/// `(x+(y+z))` therefore mis-scan and fail. The group's contents must parse
/// as a full expression (two facts joined by an operator) and must be
/// consumed entirely; once the group branch has been entered, its failure
/// fails the whole call.
///
/// Empty input returns `None` without touching the text.
///
/// Grammar:
/// ```text
///     fact := "(" expression ")"
///           | ("+" | "-") fact
///           | integer
///           | identifier
/// ```
/// # Parameters
/// - `text`: The input to parse, anchored at position 0.
///
/// # Returns
/// - `Some((value, consumed))`: The parsed fact and the number of characters
///   it covers.
/// - `None`: If no branch matches; no partial result is ever returned.
#[must_use]
pub fn parse_fact(text: &str) -> Option<(Value, usize)> {
    if text.is_empty() {
        return None;
    }

    if text.starts_with('(') {
        // First ')' at index >= 2, so the group is never empty.
        let close = text.get(2..)?.find(')')? + 2;
        let group = &text[1..close];
        let (expression, consumed) = parse_expression(group)?;
        if consumed != group.len() {
            return None;
        }

        return Some((Value::Parenthesized(Box::new(expression)), close + 1));
    }

    if let Some(rest) = text.strip_prefix('-') {
        let (inner, consumed) = parse_fact(rest)?;
        return Some((Value::Unary { op:    UnaryOperator::Minus,
                                    inner: Box::new(inner), },
                     consumed + 1));
    }
    if let Some(rest) = text.strip_prefix('+') {
        let (inner, consumed) = parse_fact(rest)?;
        return Some((Value::Unary { op:    UnaryOperator::Plus,
                                    inner: Box::new(inner), },
                     consumed + 1));
    }

    if let Some((digits, consumed)) = scan_integer(text) {
        let literal = digits.parse::<i64>().ok()?;
        return Some((Value::IntLiteral(literal), consumed));
    }

    let (name, consumed) = scan_identifier(text)?;
    Some((Value::Identifier(name.to_string()), consumed))
}
