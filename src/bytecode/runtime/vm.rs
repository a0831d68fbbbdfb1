//! A virtual machine for running Clear bytecode.

use tracing::debug;
use crate::{Value, CodeAddress, STACK_CAPACITY};
use crate::bytecode::Chunk;
use crate::bytecode::runtime::{stack::Stack, error::{RuntimeError, RuntimeErrorKind, RuntimeResult}};

/// Current state of the vm, checked after each instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VMState {
    /// The VM is executing a chunk.
    Running,
    /// The VM returned a result or faulted. A fresh [VM::interpret] or [VM::start] is required to run again.
    Halted,
}

/// VM configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VMConfig {
    /// Number of value slots on the operand stack.
    pub stack_capacity: usize,
}

impl Default for VMConfig {
    fn default() -> Self {
        VMConfig {
            stack_capacity: STACK_CAPACITY,
        }
    }
}

/// A virtual machine for running Clear bytecode.
///
/// The VM owns its operand stack but not the code. Chunks are borrowed for the duration of a run, so
/// a single VM can execute any number of chunks one after another and independent VMs never share state.
#[derive(Debug)]
pub struct VM {
    pub(crate) ip       : CodeAddress,
    pub(crate) state    : VMState,
    pub(crate) result   : Option<Value>,
    pub(crate) stack    : Stack,
}

/// Public VM methods.
impl VM {
    /// Create a new VM instance with the default configuration.
    pub fn new() -> Self {
        Self::with_config(VMConfig::default())
    }

    /// Create a new VM instance with the given configuration.
    pub fn with_config(config: VMConfig) -> Self {
        VM {
            ip      : 0,
            state   : VMState::Halted,
            result  : None,
            stack   : Stack::new(config.stack_capacity),
        }
    }

    /// Executes the given chunk from its first instruction until it returns or faults.
    pub fn interpret(self: &mut Self, chunk: &Chunk) -> RuntimeResult<Value> {
        self.start(chunk);
        loop {
            if let Some(result) = self.step(chunk)? {
                return Ok(result);
            }
        }
    }

    /// Resets the stack and instruction pointer and enters the running state without executing anything.
    pub fn start(self: &mut Self, chunk: &Chunk) {
        debug!(target: "clear::vm", bytes = chunk.len(), constants = chunk.constants().len(), stack_capacity = self.stack.capacity(), "starting chunk");
        self.stack.reset();
        self.ip = 0;
        self.result = None;
        self.state = VMState::Running;
    }

    /// Executes a single instruction. Returns the program result once `OP_RETURN` was executed.
    ///
    /// Callers that need bounded execution can [start](VM::start) a chunk and step it themselves,
    /// inspecting the VM between steps.
    pub fn step(self: &mut Self, chunk: &Chunk) -> RuntimeResult<Option<Value>> {
        if self.state != VMState::Running {
            return Err(RuntimeError::new(RuntimeErrorKind::NotRunning, self.ip));
        }
        #[cfg(feature="debugging")]
        self.trace(chunk);
        if let Err(error) = self.exec_instruction(chunk) {
            self.state = VMState::Halted;
            debug!(target: "clear::vm", offset = error.offset(), line = chunk.line(error.offset()), "fault: {}", error.kind());
            return Err(error);
        }
        if self.state == VMState::Halted {
            debug!(target: "clear::vm", "halted");
            Ok(self.result.take())
        } else {
            Ok(None)
        }
    }

    /// Returns the current VM state.
    pub fn state(self: &Self) -> VMState {
        self.state
    }

    /// Returns the offset of the next instruction to execute.
    pub fn ip(self: &Self) -> CodeAddress {
        self.ip
    }

    /// Returns the live operand stack, bottom first.
    pub fn stack(self: &Self) -> &[Value] {
        self.stack.data()
    }

    /// Halts the VM with the given result.
    pub(crate) fn halt(self: &mut Self, result: Value) {
        self.result = Some(result);
        self.state = VMState::Halted;
    }

    /// Emits the stack and the upcoming instruction.
    #[cfg(feature="debugging")]
    fn trace(self: &Self, chunk: &Chunk) {
        let instruction = chunk.describe_instruction(self.ip).map(|(text, _)| text).unwrap_or_default();
        tracing::trace!(target: "clear::vm", offset = self.ip, stack = ?self.stack.data(), "{}", instruction);
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
