use crate::error::{EvalError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a failure of a whole program run.
///
/// The parsing and evaluation cores are pure functions of a single line of
/// text and carry no position information; the driver attaches the 1-based
/// line number it was processing when the failure occurred.
pub enum ProgramError {
    /// A line failed to parse.
    Parse {
        /// The source line where the error occurred.
        line:  usize,
        /// The underlying parse error.
        error: ParseError,
    },
    /// A statement parsed but its value failed to resolve.
    Eval {
        /// The source line where the error occurred.
        line:  usize,
        /// The underlying evaluation error.
        error: EvalError,
    },
}

impl ProgramError {
    /// Gets the source line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Parse { line, .. } | Self::Eval { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { line, error } => write!(f, "Error on line {line}: {error}"),
            Self::Eval { line, error } => write!(f, "Error on line {line}: {error}"),
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { error, .. } => Some(error),
            Self::Eval { error, .. } => Some(error),
        }
    }
}
