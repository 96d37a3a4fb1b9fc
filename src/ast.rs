/// Represents a unary sign operator.
///
/// A sign is applied as a prefix to a single value. Chains of signs are legal
/// and every sign in the chain is its own AST node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+`); leaves the inner value unchanged.
    Plus,
    /// Negation (`-`).
    Minus,
}

/// Represents a binary operator.
///
/// The language supports exactly these three; there is no division and no
/// comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
}

/// An abstract syntax tree (AST) node representing a single value-producing
/// term.
///
/// `Value` is the closed set of shapes the fact parser can produce: an
/// integer literal, a reference to a previously bound variable, a
/// sign-prefixed term, or a parenthesized sub-expression. The evaluator
/// matches on this enum exhaustively, so there is no "unknown shape" left to
/// reach at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A non-negative integer literal with no leading zero (except `0`).
    IntLiteral(i64),
    /// Reference to a variable by name.
    Identifier(String),
    /// A sign-prefixed term, e.g. `-x` or `---x` (three nested nodes).
    Unary {
        /// The sign to apply.
        op:    UnaryOperator,
        /// The term the sign applies to.
        inner: Box<Value>,
    },
    /// A sub-expression wrapped in `(...)`.
    ///
    /// This is also the shape a bare top-level expression is wrapped into by
    /// the assignment parser, so that every right-hand side fits `Value`.
    Parenthesized(Box<Expression>),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::IntLiteral(value)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Self::Identifier(name.to_string())
    }
}

/// Two values joined by exactly one binary operator.
///
/// There is no associativity or precedence beyond this fixed shape: an
/// expression is always `left op right` and never a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Left operand.
    pub left:  Value,
    /// The operator joining the operands.
    pub op:    BinaryOperator,
    /// Right operand.
    pub right: Value,
}

/// A top-level statement binding an identifier to a value.
///
/// Statements are the units parsed from input lines; a program is a sequence
/// of them, evaluated first to last.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The name being bound.
    pub identifier: String,
    /// The right-hand side, already in `Value` shape.
    pub value:      Value,
}
