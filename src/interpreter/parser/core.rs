use crate::{ast::Statement, error::ParseError, interpreter::parser::statement::parse_assignment};

/// Result type used by the statement entry point.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole source line into a [`Statement`].
///
/// This is the entry point for parsing. It runs the assignment parser over
/// the line and additionally requires that the statement accounts for every
/// character of it, so trailing text after the `;` (including a second
/// statement on the same line) is rejected.
///
/// # Parameters
/// - `text`: One source line, with no surrounding whitespace and no newline.
///
/// # Returns
/// The parsed statement.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if the line is empty.
/// - [`ParseError::MalformedAssignment`] if the line does not match
///   `identifier = <value>;`.
/// - [`ParseError::TrailingCharacters`] if text remains after a complete
///   statement.
pub fn parse_statement(text: &str) -> ParseResult<Statement> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let ((identifier, value), consumed) =
        parse_assignment(text).ok_or(ParseError::MalformedAssignment)?;

    if consumed != text.len() {
        return Err(ParseError::TrailingCharacters { found: text[consumed..].to_string(), });
    }

    Ok(Statement { identifier, value })
}
