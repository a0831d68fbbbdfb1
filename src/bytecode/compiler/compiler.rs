//! Bytecode emitter. Compiles bytecode from AST.

pub mod error;

use tracing::debug;
use crate::{ConstIndex, Line, Value, MAX_CONSTANTS};
use crate::bytecode::Chunk;
use crate::frontend::ast::{Program, ExprId, ExprKind, Expression, LiteralValue, UnaryOperator, BinaryOperator};
use error::{CompileError, CompileErrorKind, CompileResult};

/// Pending work while walking the expression arena.
#[derive(Copy, Clone, Debug)]
enum Task {
    /// Compile the given node.
    Visit(ExprId),
    /// Operand is on the stack, emit the operator.
    Unary(UnaryOperator, Line),
    /// Both operands are on the stack, emit the operator.
    Binary(BinaryOperator, Line),
}

/// Bytecode emitter. Compiles bytecode from a parsed program.
struct Compiler<'a> {
    /// Program being compiled.
    program : &'a Program,
    /// Chunk being written to.
    chunk   : Chunk,
    /// Explicit traversal stack. Keeps native stack usage constant regardless of expression depth.
    tasks   : Vec<Task>,
}

/// Compiles a parsed program into a chunk.
///
/// Every statement is compiled in order. Statements other than the last one are followed by `OP_POP`, the value
/// of the last one is returned via `OP_RETURN`. On error no chunk is produced.
///
/// ```
/// use clear::{parser, compiler, runtime::VM, Value};
///
/// let program = parser::parse("(2 + 3) * 4").unwrap();
/// let chunk = compiler::compile(&program).unwrap();
/// let result = VM::new().interpret(&chunk).unwrap();
/// assert_eq!(result, Value::new(20.0));
/// ```
pub fn compile(program: &Program) -> CompileResult<Chunk> {
    let mut compiler = Compiler {
        program : program,
        chunk   : Chunk::new(),
        tasks   : Vec::new(),
    };

    let statements = program.statements();
    let mut return_line = 1;

    for (index, &root) in statements.iter().enumerate() {
        let line = compiler.compile_expression(root)?;
        if index + 1 < statements.len() {
            compiler.chunk.write_pop(line);
        }
        return_line = line;
    }

    compiler.chunk.write_return(return_line);

    debug!(target: "clear::compiler", statements = statements.len(), bytes = compiler.chunk.len(), constants = compiler.chunk.constants().len(), "compiled program");
    Ok(compiler.chunk)
}

impl<'a> Compiler<'a> {

    /// Compiles the expression tree rooted at the given node in post-order. Returns the line of the root.
    fn compile_expression(self: &mut Self, root: ExprId) -> CompileResult<Line> {
        let root_line = self.node(root, None, 0)?.line;
        self.tasks.push(Task::Visit(root));
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Visit(id) => {
                    let node = self.node(id, None, root_line)?;
                    match node.kind {
                        ExprKind::Literal(ref value) => self.compile_literal(value, node.line)?,
                        ExprKind::Unary(op, operand) => {
                            self.node(operand, Some(id), node.line)?;
                            self.tasks.push(Task::Unary(op, node.line));
                            self.tasks.push(Task::Visit(operand));
                        },
                        ExprKind::Binary(op, left, right) => {
                            self.node(left, Some(id), node.line)?;
                            self.node(right, Some(id), node.line)?;
                            // left is popped and compiled first
                            self.tasks.push(Task::Binary(op, node.line));
                            self.tasks.push(Task::Visit(right));
                            self.tasks.push(Task::Visit(left));
                        },
                    }
                },
                Task::Unary(op, line) => self.compile_unary_op(op, line)?,
                Task::Binary(op, line) => self.compile_binary_op(op, line),
            }
        }
        Ok(root_line)
    }

    /// Looks up a node. Children must precede their parent in the arena, which rules out reference cycles.
    fn node(self: &Self, id: ExprId, parent: Option<ExprId>, line: Line) -> CompileResult<&'a Expression> {
        let program = self.program;
        match program.node(id) {
            Some(node) if parent.map_or(true, |parent| id < parent) => Ok(node),
            _ => Err(CompileError::new(CompileErrorKind::InvalidNode(id), line)),
        }
    }

    /// Compiles a literal into a constant load.
    fn compile_literal(self: &mut Self, item: &LiteralValue, line: Line) -> CompileResult {
        match item {
            LiteralValue::Numeric(numeric) => {
                let value = Value::new(*numeric);
                if !value.is_finite() {
                    return Err(CompileError::new(CompileErrorKind::MalformedLiteral, line));
                }
                self.write_constant(value, line)
            },
            LiteralValue::Bool(_) => Err(CompileError::new(CompileErrorKind::Unsupported("boolean literal"), line)),
            LiteralValue::String(_) => Err(CompileError::new(CompileErrorKind::Unsupported("string literal"), line)),
        }
    }

    /// Stores the value in the constant pool and writes an instruction loading it.
    fn write_constant(self: &mut Self, value: Value, line: Line) -> CompileResult {
        if self.chunk.constants().len() >= MAX_CONSTANTS {
            return Err(CompileError::new(CompileErrorKind::ConstantPoolOverflow, line));
        }
        let index = self.chunk.add_constant(value);
        self.chunk.write_constant(index as ConstIndex, line);
        Ok(())
    }

    /// Compiles the given unary operator, operand is expected on the stack.
    fn compile_unary_op(self: &mut Self, op: UnaryOperator, line: Line) -> CompileResult {
        match op {
            UnaryOperator::Negate => { self.chunk.write_negate(line); },
            UnaryOperator::Not => return Err(CompileError::new(CompileErrorKind::Unsupported("logical not"), line)),
        }
        Ok(())
    }

    /// Compiles the given binary operator, operands are expected on the stack.
    fn compile_binary_op(self: &mut Self, op: BinaryOperator, line: Line) {
        match op {                                  // stack: left right
            BinaryOperator::Add      => self.chunk.write_add(line),
            BinaryOperator::Subtract => self.chunk.write_subtract(line),
            BinaryOperator::Multiply => self.chunk.write_multiply(line),
            BinaryOperator::Divide   => self.chunk.write_divide(line),
        };                                          // stack: result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcodes::*;
    use crate::frontend::ast::ProgramBuilder;

    #[test]
    fn children_must_precede_parent() {
        let mut builder = ProgramBuilder::new();
        let own = builder.unary(UnaryOperator::Negate, ExprId::from(0), 4);
        builder.statement(own);
        let error = compile(&builder.finish()).unwrap_err();
        assert_eq!(error.kind(), &CompileErrorKind::InvalidNode(ExprId::from(0)));
        assert_eq!(error.line(), 4);
    }

    #[test]
    fn missing_root() {
        let mut builder = ProgramBuilder::new();
        builder.statement(ExprId::from(3));
        let error = compile(&builder.finish()).unwrap_err();
        assert_eq!(error.kind(), &CompileErrorKind::InvalidNode(ExprId::from(3)));
        assert_eq!(error.line(), 0);
    }

    #[test]
    fn post_order_emission() {
        let mut builder = ProgramBuilder::new();
        let a = builder.number(1.0, 1);
        let b = builder.number(2.0, 1);
        let neg = builder.unary(UnaryOperator::Negate, b, 2);
        let sub = builder.binary(BinaryOperator::Subtract, a, neg, 3);
        builder.statement(sub);
        let chunk = compile(&builder.finish()).unwrap();
        assert_eq!(chunk.instructions(), &[ OP_CONSTANT, 0, OP_CONSTANT, 1, OP_NEGATE, OP_SUBTRACT, OP_RETURN ]);
        assert_eq!(chunk.lines(), &[ 1, 1, 1, 1, 2, 3, 3 ]);
    }
}
