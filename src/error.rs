/// Parsing errors.
///
/// Defines all error types that can occur while turning a source line into a
/// statement. Parse errors cover empty input, malformed statements, oversized
/// literals, and trailing text after a complete statement.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while resolving a parsed value
/// against the environment, such as references to unbound variables or
/// arithmetic overflow.
pub mod eval_error;
/// Program-level errors.
///
/// Wraps parse and evaluation errors with the line number the driver was
/// processing when the failure occurred.
pub mod program_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use program_error::ProgramError;
