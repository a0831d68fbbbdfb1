
/// Type used to address the constant pool from bytecode. Its width caps the pool size.
pub type ConstIndex = u8;

/// Type representing a source line number (1-based).
pub type Line = u32;

/// Type representing a byte offset into a chunk's instructions.
pub type CodeAddress = usize;

/// Maximum number of constants a single chunk may hold.
pub const MAX_CONSTANTS: usize = ConstIndex::MAX as usize + 1;

/// Default number of value slots on the VM operand stack.
pub const STACK_CAPACITY: usize = 256;

/// Minimum non-zero capacity of a growable bytecode buffer.
pub const MIN_BUFFER_CAPACITY: usize = 8;

/// Maximum nesting depth of parenthesized and unary expressions accepted by the parser.
pub const MAX_NESTING: usize = 100;
