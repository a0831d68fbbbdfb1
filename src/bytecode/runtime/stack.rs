use crate::Value;
use crate::bytecode::runtime::error::{RuntimeErrorKind, StepResult};

/// A fixed capacity operand stack holding temporary bytecode operation results and inputs.
///
/// Popping only moves the top cursor. The vacated slot keeps its previous bits until a later push
/// overwrites it, nothing reads a slot above the cursor.
#[derive(Debug)]
pub struct Stack {
    /// Value slots, allocated once.
    slots   : Box<[Value]>,
    /// Index of the next free slot.
    top     : usize,
}

impl Stack {
    /// Creates a new operand stack with room for the given number of values.
    pub fn new(capacity: usize) -> Self {
        Stack {
            slots   : vec![Value::default(); capacity].into_boxed_slice(),
            top     : 0,
        }
    }
    /// Pushes a value onto the stack.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn push(self: &mut Self, value: Value) -> StepResult {
        let slot = self.slots.get_mut(self.top).ok_or(RuntimeErrorKind::StackOverflow)?;
        *slot = value;
        self.top += 1;
        Ok(())
    }
    /// Pops a value off the stack.
    #[cfg_attr(not(debug_assertions), inline(always))]
    pub fn pop(self: &mut Self) -> StepResult<Value> {
        if self.top == 0 {
            return Err(RuntimeErrorKind::StackUnderflow);
        }
        self.top -= 1;
        Ok(self.slots[self.top])
    }
    /// Maximum number of values the stack can hold.
    #[inline]
    pub fn capacity(self: &Self) -> usize {
        self.slots.len()
    }
    /// Resets the stack. Slot contents are left in place.
    pub fn reset(self: &mut Self) {
        self.top = 0;
    }
    /// Returns the live portion of the stack as slice, bottom first.
    pub fn data(self: &Self) -> &[Value] {
        &self.slots[..self.top]
    }
}
