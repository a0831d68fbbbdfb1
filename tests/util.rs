pub use clear::*;
pub use clear::parser::parse;
pub use clear::bytecode::opcodes::*;
pub use clear::runtime::{VM, VMConfig, VMState, RuntimeErrorKind};

/// Compile a bit of Clear code and return the resulting chunk.
#[allow(dead_code)]
pub fn compile(code: &str) -> Chunk {
    match build(code) {
        Ok(chunk) => chunk,
        Err(err) => panic!("Failed to compile <{}>: {}", code, err),
    }
}

/// Run a bit of Clear code and return its result as f64.
#[allow(dead_code)]
pub fn eval(code: &str) -> f64 {
    match run(code) {
        Ok(value) => value.as_f64(),
        Err(err) => panic!("Failed to run <{}>: {}", code, err),
    }
}

/// Run a chunk that is expected to fault and return the fault kind and the offset it was reported at.
#[allow(dead_code)]
pub fn fault(chunk: &Chunk) -> (RuntimeErrorKind, usize) {
    match VM::new().interpret(chunk) {
        Ok(value) => panic!("Expected fault, got result <{}>", value),
        Err(err) => (*err.kind(), err.offset()),
    }
}

/// Build a program consisting of the given number of numeric literals summed together, one literal per line.
#[allow(dead_code)]
pub fn literal_sum(count: usize) -> String {
    (0..count).map(|i| i.to_string()).collect::<Vec<_>>().join(" +\n")
}
