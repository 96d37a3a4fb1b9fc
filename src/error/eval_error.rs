#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while resolving a parsed value.
pub enum EvalError {
    /// Tried to use a variable with no binding yet.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Arithmetic operation overflowed.
    Overflow,
    /// The evaluator was handed an AST shape it cannot classify.
    ///
    /// `Value` is a closed enum and the evaluator matches it exhaustively, so
    /// this variant is never produced by the current code; it exists so the
    /// driver contract can report a parser/evaluator mismatch if the AST
    /// types ever grow apart.
    Internal,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },

            Self::Internal => write!(f, "Internal error: unrecognized value shape."),
        }
    }
}

impl std::error::Error for EvalError {}
