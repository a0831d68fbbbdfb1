//! AST type definitions.
//!
//! A [Program] is an arena of [Expression] nodes. Children are referenced by [ExprId], so the tree can be
//! walked without recursion and without following pointers.

use std::fmt::{self, Debug};
use crate::Line;

/// Index of an expression node within its [Program].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Hash)]
pub struct ExprId(usize);

impl ExprId {
    /// Converts the id into a usize. Useful to avoid Into::<usize>::into(self) when inference fails.
    pub fn into_usize(self: Self) -> usize {
        self.0
    }
}

impl From<ExprId> for usize {
    fn from(input: ExprId) -> usize {
        input.0
    }
}

impl From<usize> for ExprId {
    fn from(input: usize) -> ExprId {
        ExprId(input)
    }
}

impl Debug for ExprId {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Numeric(f64),
    Bool(bool),
    String(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation `-`.
    Negate,
    /// Logical negation `!`.
    Not,
}

impl UnaryOperator {
    /// Maps an operator token to the operator.
    pub(crate) fn from_string(op: &str) -> Option<Self> {
        match op {
            "-" => Some(Self::Negate),
            "!" => Some(Self::Not),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Maps an operator token to the operator.
    pub(crate) fn from_string(op: &str) -> Option<Self> {
        match op {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

/// The kind of an expression node along with its children.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(LiteralValue),
    Unary(UnaryOperator, ExprId),
    Binary(BinaryOperator, ExprId, ExprId),
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub kind    : ExprKind,
    /// Source line the node was parsed from. Binary operations report the line of their operator.
    pub line    : Line,
}

/// A parsed program: the node arena and the ordered list of statement roots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    nodes       : Vec<Expression>,
    statements  : Vec<ExprId>,
}

impl Program {
    /// Returns the node with the given id, if it exists.
    pub fn node(self: &Self, id: ExprId) -> Option<&Expression> {
        self.nodes.get(id.into_usize())
    }
    /// Returns all nodes in the arena in insertion order.
    pub fn nodes(self: &Self) -> &[Expression] {
        &self.nodes
    }
    /// Returns the root node of each statement in source order.
    pub fn statements(self: &Self) -> &[ExprId] {
        &self.statements
    }
    /// Whether the program has no statements.
    pub fn is_empty(self: &Self) -> bool {
        self.statements.is_empty()
    }
}

/// Incrementally constructs a [Program].
///
/// Child ids are not validated here. Referencing a node that does not exist is reported by the compiler.
///
/// ```
/// use clear::frontend::ast::{ProgramBuilder, BinaryOperator};
///
/// let mut builder = ProgramBuilder::new();
/// let left = builder.number(2.0, 1);
/// let right = builder.number(3.0, 1);
/// let sum = builder.binary(BinaryOperator::Add, left, right, 1);
/// builder.statement(sum);
/// let program = builder.finish();
/// assert_eq!(program.statements().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds an arbitrary node to the arena and returns its id.
    pub fn push(self: &mut Self, kind: ExprKind, line: Line) -> ExprId {
        let id = ExprId::from(self.program.nodes.len());
        self.program.nodes.push(Expression { kind, line });
        id
    }
    pub fn literal(self: &mut Self, value: LiteralValue, line: Line) -> ExprId {
        self.push(ExprKind::Literal(value), line)
    }
    pub fn number(self: &mut Self, value: f64, line: Line) -> ExprId {
        self.literal(LiteralValue::Numeric(value), line)
    }
    pub fn unary(self: &mut Self, op: UnaryOperator, operand: ExprId, line: Line) -> ExprId {
        self.push(ExprKind::Unary(op, operand), line)
    }
    pub fn binary(self: &mut Self, op: BinaryOperator, left: ExprId, right: ExprId, line: Line) -> ExprId {
        self.push(ExprKind::Binary(op, left, right), line)
    }
    /// Appends a statement rooted at the given node.
    pub fn statement(self: &mut Self, root: ExprId) {
        self.program.statements.push(root);
    }
    pub fn finish(self: Self) -> Program {
        self.program
    }
}
