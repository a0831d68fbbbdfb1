//! Textual rendering of chunks.

use std::io::{self, Write};
use crate::CodeAddress;
use crate::bytecode::Chunk;

/// Renders the instruction at `offset` as a single line and returns it with the offset of the next instruction.
///
/// The line starts with the zero-padded offset, followed by the source line or `   |` if the instruction
/// shares the line of the preceding byte.
pub fn disassemble_instruction(chunk: &Chunk, offset: CodeAddress) -> (String, CodeAddress) {
    let line = match chunk.line(offset) {
        Some(line) if offset > 0 && chunk.line(offset - 1) == Some(line) => "   |".to_string(),
        Some(line) => format!("{:>4}", line),
        None => "   ?".to_string(),
    };
    match chunk.describe_instruction(offset) {
        Some((text, next)) => (format!("{:04} {} {}", offset, line, text), next),
        None => (format!("{:04} {} <end>", offset, line), offset + 1),
    }
}

/// Writes a `== name ==` header followed by one line per instruction to the given writer.
pub fn write_disassembly<W: Write>(chunk: &Chunk, name: &str, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "== {} ==", name)?;
    let mut offset = 0;
    while offset < chunk.len() {
        let (text, next) = disassemble_instruction(chunk, offset);
        writeln!(writer, "{}", text)?;
        offset = next;
    }
    Ok(())
}

/// Returns the disassembly of the given chunk as a string.
pub fn disassemble(chunk: &Chunk, name: &str) -> String {
    let mut result = format!("== {} ==\n", name);
    let mut offset = 0;
    while offset < chunk.len() {
        let (text, next) = disassemble_instruction(chunk, offset);
        result.push_str(&text);
        result.push('\n');
        offset = next;
    }
    result
}
