#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
///
/// Parsing is all-or-nothing: none of these variants carries a partial AST,
/// and the driver treats every one of them as terminal for the whole program.
pub enum ParseError {
    /// The input line was empty.
    EmptyInput,
    /// The line did not match `identifier = <value>;`.
    ///
    /// This covers a malformed identifier or integer, missing the exact
    /// `" = "` or `;` delimiters, and a malformed or mis-scanned parenthesis
    /// group.
    MalformedAssignment,
    /// A complete statement parsed, but text remained after the `;`.
    TrailingCharacters {
        /// The leftover text that followed the statement.
        found: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty statement."),

            Self::MalformedAssignment => {
                write!(f, "Statement does not match 'identifier = <value>;'.")
            },

            Self::TrailingCharacters { found } => {
                write!(f, "Extra text after statement: {found}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
