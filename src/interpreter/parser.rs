/// Statement entry point.
///
/// Converts a whole source line into a `Statement`, turning the all-or-nothing
/// `Option` results of the inner parsers into descriptive parse errors.
pub mod core;

/// Fact parsing.
///
/// Parses a single value-producing term: a parenthesized expression, a
/// sign-prefixed term, an integer literal, or an identifier.
pub mod fact;

/// Expression parsing.
///
/// Parses exactly two facts joined by one binary operator. There is no
/// operator chaining and no precedence.
pub mod expression;

/// Assignment parsing.
///
/// Parses `identifier = <value>;` with exact single-space delimiters around
/// `=` and a terminating semicolon.
pub mod statement;
