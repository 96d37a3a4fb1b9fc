use crate::{
    ast::{BinaryOperator, UnaryOperator, Value},
    error::EvalError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Resolves a parsed value to an integer against the environment.
///
/// This is the entry point for evaluation. The evaluator dispatches on the
/// value's shape: literals resolve to themselves, identifiers are looked up,
/// signs recurse into their operand, and parenthesized expressions resolve
/// both operands before combining them. The environment is read-only here;
/// binding the result is the driver's job.
///
/// Arithmetic is checked `i64`: `-` subtracts (left minus right), `+` adds,
/// `*` multiplies, and overflow is an error rather than a wrap. The `Value`
/// enum is matched exhaustively, so [`EvalError::Internal`] has no reachable
/// source in this function.
///
/// # Parameters
/// - `environment`: The bindings made by earlier statements.
/// - `value`: The value to resolve.
///
/// # Returns
/// The resolved integer.
///
/// # Errors
/// - [`EvalError::UndefinedVariable`] if an identifier has no binding yet.
/// - [`EvalError::Overflow`] if a negation or binary operation overflows.
pub fn resolve(environment: &Environment, value: &Value) -> EvalResult<i64> {
    match value {
        Value::IntLiteral(literal) => Ok(*literal),

        Value::Identifier(name) => {
            environment.get(name)
                       .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
        },

        Value::Unary { op: UnaryOperator::Minus,
                       inner, } => {
            resolve(environment, inner)?.checked_neg().ok_or(EvalError::Overflow)
        },
        Value::Unary { op: UnaryOperator::Plus,
                       inner, } => resolve(environment, inner),

        Value::Parenthesized(expression) => {
            let left = resolve(environment, &expression.left)?;
            let right = resolve(environment, &expression.right)?;

            let combined = match expression.op {
                BinaryOperator::Add => left.checked_add(right),
                BinaryOperator::Sub => left.checked_sub(right),
                BinaryOperator::Mul => left.checked_mul(right),
            };

            combined.ok_or(EvalError::Overflow)
        },
    }
}
