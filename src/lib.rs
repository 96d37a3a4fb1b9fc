//! # assigna
//!
//! assigna is a tiny sequential assignment language written in Rust.
//! A program is a newline-separated list of statements of the form
//! `identifier = <value>;`, where a value is an integer expression built from
//! literals, previously bound identifiers, unary `+`/`-`, and at most one
//! binary operator (`+`, `-`, `*`) optionally wrapped in parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ProgramError,
    interpreter::{environment::Environment, evaluator::resolve, parser::core::parse_statement},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Value` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the value, expression, and statement types of the language.
/// - Keeps the set of value shapes closed, so the evaluator can match them
///   exhaustively.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Both kinds are terminal: there is no retry, no partial
/// binding, and no recovery.
///
/// # Responsibilities
/// - Defines disjoint error enums for the parsing and evaluation phases.
/// - Wraps them with line numbers at the driver level for reporting.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of program execution.
///
/// This module ties together scanning, parsing, evaluation, and the binding
/// environment to provide a complete runtime for assignment programs.
///
/// # Responsibilities
/// - Coordinates the core components: scanner, parser, evaluator, and
///   environment.
/// - Provides the building blocks the [`run_program`] driver is made of.
pub mod interpreter;

/// Runs a program and returns its bindings.
///
/// The source is split on newlines; empty lines are skipped and every other
/// line must hold exactly one statement. Statements are parsed and resolved
/// in order, each binding landing in the environment before the next line is
/// touched, so an identifier can only refer to lines above it. The run
/// aborts on the first parse or evaluation error with no partial output.
///
/// # Errors
/// Returns a [`ProgramError`] carrying the 1-based line number of the first
/// line that failed to parse or evaluate.
///
/// # Examples
/// ```
/// use assigna::run_program;
///
/// let environment = run_program("x = 1;\ny = 2;\nz = ---(x+y)*(x+-y);").unwrap();
/// let bindings: Vec<(&str, i64)> = environment.iter().collect();
/// assert_eq!(bindings, vec![("x", 1), ("y", 2), ("z", 3)]);
///
/// // 'q' is not defined, so the run fails on line 1.
/// assert!(run_program("x = q;").is_err());
/// ```
pub fn run_program(source: &str) -> Result<Environment, ProgramError> {
    let mut environment = Environment::new();

    for (index, text) in source.lines().enumerate() {
        if text.is_empty() {
            continue;
        }
        let line = index + 1;

        let statement =
            parse_statement(text).map_err(|error| ProgramError::Parse { line, error })?;
        let resolved = resolve(&environment, &statement.value)
            .map_err(|error| ProgramError::Eval { line, error })?;

        environment.insert(statement.identifier, resolved);
    }

    Ok(environment)
}
