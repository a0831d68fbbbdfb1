//! Opcode definitions. Implemented on Chunk/VM.

use crate::ConstIndex;
#[cfg(feature="runtime")]
use crate::bytecode::runtime::error::RuntimeErrorKind;

impl_opcodes!{

    /// Load constant from constant pool onto the stack.
    fn Constant(&mut self, &chunk, index: ConstIndex) {
        // out of range indices are never emitted by the compiler
        let value = chunk.constant(index).ok_or(RuntimeErrorKind::InvalidConstant(index))?;
        self.stack.push(value)?;
    }

    /// Pops a value and pushes its negation.
    fn Negate(&mut self) {
        let a = self.stack.pop()?;
        self.stack.push(-a)?;
    }

    /// Pops 2 values from the stack and pushes their sum.
    fn Add(&mut self) {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(a + b)?;
    }

    /// Pops 2 values from the stack and pushes their difference.
    fn Subtract(&mut self) {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(a - b)?;
    }

    /// Pops 2 values from the stack and pushes their product.
    fn Multiply(&mut self) {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(a * b)?;
    }

    /// Pops 2 values from the stack and pushes their quotient.
    fn Divide(&mut self) {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(a / b)?;
    }

    /// Pops and discards the top value.
    fn Pop(&mut self) {
        self.stack.pop()?;
    }

    /// Pops the top value and terminates execution with it as the program result.
    fn Return(&mut self) {
        let result = self.stack.pop()?;
        self.halt(result);
    }
}
