use crate::util::*;

#[test]
fn lone_return_underflows() {
    let mut chunk = Chunk::new();
    chunk.write_return(1);
    assert_eq!(fault(&chunk), (RuntimeErrorKind::StackUnderflow, 0));
}

#[test]
fn empty_program_underflows() {
    let chunk = compile("  // nothing here\n");
    assert_eq!(chunk.instructions(), &[ OP_RETURN ]);
    assert_eq!(fault(&chunk), (RuntimeErrorKind::StackUnderflow, 0));
}

#[test]
fn unknown_opcode_offset() {
    let mut chunk = Chunk::new();
    let index = chunk.add_constant(Value::new(1.0)) as u8;
    chunk.write_constant(index, 1);
    chunk.append_byte(0xee, 2);
    chunk.write_return(3);
    let (kind, offset) = fault(&chunk);
    assert_eq!(kind, RuntimeErrorKind::UnknownOpcode(0xee));
    assert_eq!(offset, 2);
    assert_eq!(chunk.line(offset), Some(2));
}

#[test]
fn stack_overflow_with_small_capacity() {
    let chunk = compile("1 +\n(2 +\n(3 +\n4))");
    let mut vm = VM::with_config(VMConfig { stack_capacity: 3 });
    let err = vm.interpret(&chunk).unwrap_err();
    assert_eq!(err.kind(), &RuntimeErrorKind::StackOverflow);
    assert_eq!(err.offset(), 6);
    assert_eq!(chunk.line(err.offset()), Some(4));
    // same chunk fits a default sized stack
    assert_eq!(VM::new().interpret(&chunk), Ok(Value::new(10.0)));
}

#[test]
fn truncated_operand() {
    let mut chunk = Chunk::new();
    chunk.append_byte(OP_CONSTANT, 1);
    assert_eq!(fault(&chunk), (RuntimeErrorKind::UnexpectedEnd, 0));
}

#[test]
fn missing_return() {
    let mut chunk = Chunk::new();
    let index = chunk.add_constant(Value::new(1.0)) as u8;
    chunk.write_constant(index, 1);
    assert_eq!(fault(&chunk), (RuntimeErrorKind::UnexpectedEnd, 2));
}

#[test]
fn invalid_constant_index() {
    let mut chunk = Chunk::new();
    chunk.write_constant(5, 1);
    chunk.write_return(1);
    assert_eq!(fault(&chunk), (RuntimeErrorKind::InvalidConstant(5), 0));
}

#[test]
fn fault_halts_vm() {
    let mut chunk = Chunk::new();
    chunk.write_negate(1);
    chunk.write_return(1);
    let mut vm = VM::new();
    vm.start(&chunk);
    assert_eq!(vm.state(), VMState::Running);
    let err = vm.step(&chunk).unwrap_err();
    assert_eq!(err.kind(), &RuntimeErrorKind::StackUnderflow);
    assert_eq!(vm.state(), VMState::Halted);
    let err = vm.step(&chunk).unwrap_err();
    assert_eq!(err.kind(), &RuntimeErrorKind::NotRunning);
}

#[test]
fn error_display() {
    let mut chunk = Chunk::new();
    chunk.write_return(1);
    let err = VM::new().interpret(&chunk).unwrap_err();
    assert_eq!(err.to_string(), "Stack underflow at offset 0");
    let err: Error = err.into();
    assert_eq!(err.line(), None);
}
