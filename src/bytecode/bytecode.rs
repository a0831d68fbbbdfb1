//! Bytecode container, generation and execution.

pub mod buffer;
#[macro_use]
pub mod impl_opcodes;
pub mod opcodes;
pub mod disassembler;
#[path="compiler/compiler.rs"]
#[cfg(feature="compiler")]
pub mod compiler;
#[path="runtime/runtime.rs"]
#[cfg(feature="runtime")]
pub mod runtime;

use crate::{ConstIndex, Line, CodeAddress, Value};
use buffer::GrowableArray;

/// One compiled unit of code: instruction stream, per-byte line table and constant pool.
///
/// Chunks are filled by the [compiler](crate::compiler::compile) (or by hand via the generated
/// `write_*` methods) and are read-only once handed to the [VM](crate::runtime::VM) or the
/// [disassembler](crate::disassembler).
#[derive(Clone, Debug, Default)]
pub struct Chunk {
    instructions: GrowableArray<u8>,
    lines       : GrowableArray<Line>,
    constants   : GrowableArray<Value>,
}

impl Chunk {
    /// Creates a new, empty chunk.
    pub const fn new() -> Self {
        Chunk {
            instructions: GrowableArray::new(),
            lines       : GrowableArray::new(),
            constants   : GrowableArray::new(),
        }
    }
    /// Appends a single byte to the instruction stream, tagged with its originating source line.
    pub fn append_byte(self: &mut Self, byte: u8, line: Line) {
        self.instructions.push(byte);
        self.lines.push(line);
        debug_assert_eq!(self.instructions.len(), self.lines.len());
    }
    /// Appends a value to the constant pool and returns its index. Equal values are not deduplicated.
    ///
    /// The index is not bounds checked against the operand width, callers emitting `OP_CONSTANT`
    /// must verify it fits [ConstIndex].
    pub fn add_constant(self: &mut Self, value: Value) -> usize {
        self.constants.push(value)
    }
    /// Returns the constant at the given pool index.
    #[inline]
    pub fn constant(self: &Self, index: ConstIndex) -> Option<Value> {
        self.constants.get(index as usize).copied()
    }
    /// Returns the instruction stream.
    #[inline]
    pub fn instructions(self: &Self) -> &[u8] {
        &self.instructions
    }
    /// Returns the line table, one entry per instruction byte.
    #[inline]
    pub fn lines(self: &Self) -> &[Line] {
        &self.lines
    }
    /// Returns the constant pool.
    #[inline]
    pub fn constants(self: &Self) -> &[Value] {
        &self.constants
    }
    /// Returns the source line of the instruction byte at the given offset.
    pub fn line(self: &Self, offset: CodeAddress) -> Option<Line> {
        self.lines.get(offset).copied()
    }
    /// Length of the instruction stream in bytes.
    pub fn len(self: &Self) -> usize {
        self.instructions.len()
    }
    /// Whether the chunk contains no instructions.
    pub fn is_empty(self: &Self) -> bool {
        self.instructions.is_empty()
    }
    /// Allocated capacity of the instruction stream (and the line table).
    pub fn instructions_capacity(self: &Self) -> usize {
        self.instructions.capacity()
    }
    /// Allocated capacity of the constant pool.
    pub fn constants_capacity(self: &Self) -> usize {
        self.constants.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_track_instructions() {
        let mut chunk = Chunk::new();
        for i in 0..20u8 {
            chunk.append_byte(i, i as Line / 4 + 1);
            assert_eq!(chunk.instructions().len(), chunk.lines().len());
        }
        assert_eq!(chunk.len(), 20);
        assert_eq!(chunk.line(0), Some(1));
        assert_eq!(chunk.line(19), Some(5));
        assert_eq!(chunk.line(20), None);
        assert_eq!(chunk.instructions_capacity(), 32);
    }

    #[test]
    fn constants_are_not_deduplicated() {
        let mut chunk = Chunk::new();
        assert_eq!(chunk.add_constant(Value::new(1.5)), 0);
        assert_eq!(chunk.add_constant(Value::new(1.5)), 1);
        assert_eq!(chunk.add_constant(Value::new(2.0)), 2);
        assert_eq!(chunk.constants(), &[ Value::new(1.5), Value::new(1.5), Value::new(2.0) ]);
        assert_eq!(chunk.constant(1), Some(Value::new(1.5)));
        assert_eq!(chunk.constant(3), None);
        assert_eq!(chunk.constants_capacity(), 8);
    }

    #[test]
    fn empty_chunk_is_unallocated() {
        let chunk = Chunk::new();
        assert!(chunk.is_empty());
        assert_eq!(chunk.instructions_capacity(), 0);
        assert_eq!(chunk.constants_capacity(), 0);
    }
}
