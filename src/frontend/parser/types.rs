use std::cell::Cell;
use std::rc::Rc;
use std::ops::Deref;
use crate::{Line, MAX_NESTING};
use crate::frontend::parser::error::{ParseError, ParseErrorKind};

/// Position within the source, stored as number of bytes remaining until the end of the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position(pub usize);

/// Parser input
#[derive(Clone, Debug)]
pub(super) struct Input<'a> {
    pub data: &'a str,
    /// Smallest remaining input length at which any parser reported an error.
    pub max_parsed: Rc<Cell<usize>>,
    /// Current expression nesting depth.
    pub depth: Rc<Cell<usize>>,
}

impl<'a> Input<'a> {
    pub fn new(data: &'a str) -> Self {
        Input {
            data        : data,
            max_parsed  : Rc::new(Cell::new(data.len())),
            depth       : Rc::new(Cell::new(0)),
        }
    }
    pub fn position(self: &Self) -> Position {
        Position(self.data.len())
    }
    /// Returns the furthest position any parser failed at, which is the most likely location of a syntax error.
    pub fn max_parsed(self: &Self) -> Position {
        Position(self.max_parsed.get())
    }
    /// Records an error at the current position.
    pub fn track_error(self: &Self) {
        if self.data.len() < self.max_parsed.get() {
            self.max_parsed.set(self.data.len());
        }
    }
    /// Enters a nested expression. Returns false if that would exceed the maximum nesting depth.
    pub fn enter(self: &Self) -> bool {
        let depth = self.depth.get();
        if depth >= MAX_NESTING {
            false
        } else {
            self.depth.set(depth + 1);
            true
        }
    }
    /// Leaves a nested expression.
    pub fn leave(self: &Self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
    pub fn from_str(self: &Self, data: &'a str) -> Self {
        Input {
            data        : data,
            max_parsed  : self.max_parsed.clone(),
            depth       : self.depth.clone(),
        }
    }
}

impl<'a> Deref for Input<'a> {
    type Target = &'a str;
    fn deref(self: &Self) -> &Self::Target {
        &self.data
    }
}

impl<'a> PartialEq for Input<'a> {
    fn eq(self: &Self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// Parser output
pub(super) type Output<'a, O> = nom::IResult<Input<'a>, O, Failure<'a>>;

/// Parser error
#[derive(Debug)]
pub(super) struct Failure<'a> {
    pub input: Input<'a>,
    pub kind: ParseErrorKind,
}

/// Maps positions to 1-based line and column numbers.
pub(super) struct LineIndex<'a> {
    src: &'a str,
    /// Byte offset of the first character of each line.
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(src: &'a str) -> Self {
        let starts = std::iter::once(0).chain(src.match_indices('\n').map(|(index, _)| index + 1)).collect();
        LineIndex { src, starts }
    }
    /// Compute 1-based line/column number of the given position.
    pub fn loc(self: &Self, position: Position) -> (Line, u32) {
        let offset = self.src.len().saturating_sub(position.0);
        let line_index = match self.starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        let line_start = self.starts.get(line_index).copied().unwrap_or(0);
        let column = self.src.get(line_start..offset).map_or(0, |s| s.chars().count());
        (line_index as Line + 1, column as u32 + 1)
    }
    /// Compute 1-based line number of the given position.
    pub fn line(self: &Self, position: Position) -> Line {
        self.loc(position).0
    }
    /// Creates an error located at the given position.
    pub fn error(self: &Self, kind: ParseErrorKind, position: Position) -> ParseError {
        let (line, column) = self.loc(position);
        ParseError::new(kind, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(src: &str, offset: usize) -> (Line, u32) {
        LineIndex::new(src).loc(Position(src.len() - offset))
    }

    #[test]
    fn line_index() {
        let src = "1 +\n  2\n\nä * 3";
        assert_eq!(at(src, 0), (1, 1));
        assert_eq!(at(src, 2), (1, 3));
        assert_eq!(at(src, 3), (1, 4));
        assert_eq!(at(src, 4), (2, 1));
        assert_eq!(at(src, 6), (2, 3));
        assert_eq!(at(src, 8), (3, 1));
        assert_eq!(at(src, 9), (4, 1));
        assert_eq!(at(src, 12), (4, 3));
        assert_eq!(at(src, src.len()), (4, 6));
    }
}
