/// The scanner module recognizes the lexical primitives of the language.
///
/// The scanners are anchored at position 0 of their input and report how many
/// characters they consumed, so callers can advance through a line without
/// copying text. They never skip whitespace; the grammar is whitespace-exact.
///
/// # Responsibilities
/// - Recognizes identifiers (`[a-zA-Z_][a-zA-Z_0-9]*`) with longest-match
///   semantics.
/// - Recognizes unsigned integer literals (`0` or `[1-9][0-9]*`); signs
///   belong to the fact parser.
pub mod scanner;
/// The parser module builds the abstract syntax tree (AST) from source lines.
///
/// The parser is a pair of mutually recursive descent functions over raw
/// text (facts and expressions), plus the assignment parser that combines
/// them into a statement. Parsing is all-or-nothing: a failed step discards
/// the whole attempt.
///
/// # Responsibilities
/// - Converts a source line into a `Statement` AST node.
/// - Enforces the exact grammar, including the `" = "` and `;` delimiters.
/// - Tracks consumed lengths so the statement entry point can reject
///   trailing text.
pub mod parser;
/// The evaluator module resolves AST nodes to integers.
///
/// The evaluator walks a parsed value against a read-only view of the
/// environment and produces the bound integer, or an error if a referenced
/// variable is missing or arithmetic overflows.
///
/// # Responsibilities
/// - Dispatches exhaustively on the `Value` shape.
/// - Performs checked `i64` arithmetic (no wrapping semantics).
/// - Reports evaluation errors such as undefined variables.
pub mod evaluator;
/// The environment module stores resolved bindings.
///
/// The environment is an insertion-ordered mapping from identifier to its
/// resolved integer. It is owned by the driver, written once per statement,
/// and enumerated in first-insertion order after a successful run.
pub mod environment;
