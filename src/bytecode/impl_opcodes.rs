/// Macro to generate the opcode enum, chunk writers, VM dispatch and instruction decoding from instruction signatures.
///
/// Every entry has the form `fn Name(&mut self [, &chunk] [, arg: type]*) { handler }`. Operands are written
/// and read in declaration order as little endian bytes, so the writer, the VM and the disassembler always
/// agree on instruction widths.
macro_rules! impl_opcodes {
    // Read a little endian operand from a byte slice, advancing the counter. Yields None if the slice is too short.
    (@read_arg $ty:ident, $from:expr, $counter:ident) => ( {
        const SIZE: usize = ::std::mem::size_of::<$ty>();
        match $from.get($counter..$counter + SIZE) {
            Some(slice) => {
                let mut bytes = [ 0u8; SIZE ];
                bytes.copy_from_slice(slice);
                $counter += SIZE;
                Some($ty::from_le_bytes(bytes))
            },
            None => None,
        }
    });
    // Write a little endian operand to a chunk.
    (@write_arg $ty:ident, $value:expr, $to:ident, $line:ident) => (
        for byte in $value.to_le_bytes() {
            $to.append_byte(byte, $line);
        }
    );
    // Main definition block
    (
        $(
            $( #[ $attr:meta ] )*
            fn $name:ident ( & mut $self:ident $(, & $chunk:ident)? $(, $arg_name:ident : $arg_type:ident )* ) $code:block
        )+
    ) => { paste::paste! {

        /// Bytecode instructions. Generated from the instruction signatures defined via the `impl_opcodes!` macro.
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum OpCode {
            $(
                $( #[ $attr ] )*
                $name,
            )+
        }

        // Integer representations of opcodes, used to match raw instruction bytes directly.
        $(
            #[doc = "Byte value of [OpCode::" $name "]."]
            pub const [<OP_ $name:upper>]: u8 = OpCode::$name as u8;
        )+

        impl OpCode {
            /// Converts a raw instruction byte to an opcode.
            pub fn from_u8(byte: u8) -> Option<Self> {
                match byte {
                    $( [<OP_ $name:upper>] => Some(Self::$name), )+
                    _ => None,
                }
            }
            /// Returns the symbolic name of the opcode.
            pub fn name(self: Self) -> &'static str {
                match self {
                    $( Self::$name => stringify!([<OP_ $name:upper>]), )+
                }
            }
            /// Returns the number of operand bytes following the opcode.
            pub fn operand_width(self: Self) -> usize {
                match self {
                    $( Self::$name => 0 $( + ::std::mem::size_of::<$arg_type>() )*, )+
                }
            }
        }

        /// Bytecode writers. Generated from the instruction signatures defined via the `impl_opcodes!` macro.
        impl crate::bytecode::Chunk {
            $(
                $( #[ $attr ] )*
                ///
                /// Writes the instruction and returns its offset.
                pub fn [<write_ $name:snake>](self: &mut Self, $( $arg_name: $arg_type, )* line: crate::Line) -> crate::CodeAddress {
                    let position = self.len();
                    self.append_byte(OpCode::$name as u8, line);
                    $( impl_opcodes!(@write_arg $arg_type, $arg_name, self, line); )*
                    position
                }
            )+

            /// Decodes the instruction at the given offset into its textual form and returns it along with the offset
            /// of the next instruction. Returns None at or past the end of the instruction stream.
            #[allow(unused_mut)]
            pub fn describe_instruction(self: &Self, position: crate::CodeAddress) -> Option<(String, crate::CodeAddress)> {
                let instructions = self.instructions();
                let &opcode = instructions.get(position)?;
                let mut pc = position + 1;
                #[allow(unreachable_patterns)]
                let text = match opcode {
                    // implement special formatting for some opcodes
                    OP_CONSTANT => match impl_opcodes!(@read_arg ConstIndex, instructions, pc) {
                        Some(index) => match self.constant(index) {
                            Some(value) => format!("{:<16} {:>4} '{}'", OpCode::Constant.name(), index, value),
                            None => format!("{:<16} {:>4} <invalid>", OpCode::Constant.name(), index),
                        },
                        None => format!("{:<16} <truncated>", OpCode::Constant.name()),
                    },
                    $(
                        [<OP_ $name:upper>] => {
                            let mut result = OpCode::$name.name().to_string();
                            $(
                                match impl_opcodes!(@read_arg $arg_type, instructions, pc) {
                                    Some($arg_name) => result = format!("{:<16} {:>4}", result, $arg_name),
                                    None => result = format!("{:<16} <truncated>", result),
                                }
                            )*
                            result
                        },
                    )+
                    unknown => format!("Unknown opcode {}", unknown),
                };
                Some((text, pc.min(instructions.len()).max(position + 1)))
            }
        }

        /// Bytecode execution. Generated from the instruction signatures defined via the `impl_opcodes!` macro.
        #[cfg(feature="runtime")]
        impl crate::bytecode::runtime::vm::VM {
            /// Decodes the instruction at the instruction pointer, advances past it and executes it.
            pub(crate) fn exec_instruction(self: &mut Self, chunk: &crate::bytecode::Chunk) -> crate::bytecode::runtime::error::RuntimeResult {
                use crate::bytecode::runtime::error::{RuntimeError, RuntimeErrorKind};
                let start = self.ip;
                let instructions = chunk.instructions();
                let opcode = *instructions.get(start).ok_or(RuntimeError::new(RuntimeErrorKind::UnexpectedEnd, start))?;
                let mut pc = start + 1;
                let result = match opcode {
                    $(
                        [<OP_ $name:upper>] => {
                            $(
                                let $arg_name: $arg_type = impl_opcodes!(@read_arg $arg_type, instructions, pc)
                                    .ok_or(RuntimeError::new(RuntimeErrorKind::UnexpectedEnd, start))?;
                            )*
                            self.ip = pc;
                            $( let $chunk: &crate::bytecode::Chunk = chunk; )?
                            self.[<exec_ $name:snake>]( $( $chunk, )? $( $arg_name ),* )
                        },
                    )+
                    unknown => Err(RuntimeErrorKind::UnknownOpcode(unknown)),
                };
                result.map_err(|kind| RuntimeError::new(kind, start))
            }

            // Generate methods for executing each instruction on the VM struct.
            $(
                $( #[ $attr ] )*
                #[cfg_attr(not(debug_assertions), inline(always))]
                fn [<exec_ $name:snake>]( $self: &mut Self $(, $chunk: &crate::bytecode::Chunk)? $(, $arg_name: $arg_type )* ) -> crate::bytecode::runtime::error::StepResult {
                    $code
                    Ok(())
                }
            )+
        }
    } };
}
