use thiserror::Error;
use crate::Line;

/// Represents the various possible parser error-kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Syntax error")]
    SyntaxError,
    /// A numeric literal directly followed by characters that cannot continue it, e.g. `12abc` or `1.`.
    #[error("Invalid numeric value")]
    InvalidNumerical,
    /// Parentheses or unary operators nested deeper than [MAX_NESTING](crate::MAX_NESTING).
    #[error("Expression nested too deeply")]
    NestingTooDeep,
}

/// An error reported by the parser (e.g. syntax error).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    kind: ParseErrorKind,
    line: Line,
    column: u32,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: Line, column: u32) -> ParseError {
        Self { kind, line, column }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &ParseErrorKind {
        &self.kind
    }
    /// 1-based line of the error.
    pub fn line(self: &Self) -> Line {
        self.line
    }
    /// 1-based column (in characters) of the error.
    pub fn column(self: &Self) -> u32 {
        self.column
    }
}

pub type ParseResult<T = ()> = Result<T, ParseError>;
