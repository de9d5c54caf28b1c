//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the primary opcode table, bit-field extraction for the fixed
//! 32-bit instruction layout, the decoder that turns a raw word into an
//! [`decode::Opcode`] plus operand fields, and a disassembler used for tracing.
//!
//! # Layout
//!
//! ```text
//!  31      26 25   21 20   16 15   11 10              0
//! +----------+-------+-------+-------+-----------------+
//! |  opcode  |  s2   |   d   |  s1   |                 |
//! +----------+-------+-------+-------+-----------------+
//!                            |      genset (16)        |
//! ```

/// Instruction decoding into an opcode variant and operand fields.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field masks, shifts, and bit extraction utilities.
pub mod instruction;

/// Primary opcode values.
pub mod opcodes;

pub use decode::{Decoded, Opcode, decode};
pub use disasm::disassemble;
pub use instruction::InstructionBits;
