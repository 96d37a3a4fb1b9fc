use crate::{
    ast::Value,
    interpreter::{
        parser::{expression::parse_expression, fact::parse_fact},
        scanner::scan_identifier,
    },
};

/// Parses a single assignment: `identifier = <value>;`.
///
/// The delimiters are exact: one space on each side of `=`, a terminating
/// `;` immediately after the value, and no other whitespace anywhere. The
/// right-hand side is first tried as an expression (two facts joined by an
/// operator); if that fails, it is re-tried as a bare fact, so a literal,
/// identifier, signed term, or parenthesized group without a binary operator
/// is also legal.
///
/// An expression right-hand side is wrapped into [`Value::Parenthesized`] so
/// every statement carries a plain `Value`.
///
/// Grammar: `assignment := identifier " = " (expression | fact) ";"`
///
/// # Parameters
/// - `text`: The input to parse, anchored at position 0.
///
/// # Returns
/// - `Some(((identifier, value), consumed))`: The bound name, its value, and
///   the total number of characters the statement covers.
/// - `None`: If any step deviates; no partial result is ever returned.
#[must_use]
pub fn parse_assignment(text: &str) -> Option<((String, Value), usize)> {
    let (identifier, ident_len) = scan_identifier(text)?;
    let mut length = ident_len;

    if !text[length..].starts_with(" = ") {
        return None;
    }
    length += 3;

    let value = match parse_expression(&text[length..]) {
        Some((expression, consumed)) => {
            length += consumed;
            Value::Parenthesized(Box::new(expression))
        },
        None => {
            let (fact, consumed) = parse_fact(&text[length..])?;
            length += consumed;
            fact
        },
    };

    if !text[length..].starts_with(';') {
        return None;
    }
    length += 1;

    Some(((identifier.to_string(), value), length))
}
