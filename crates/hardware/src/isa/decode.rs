//! Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction word into a [`Decoded`] value:
//! the primary opcode mapped onto the [`Opcode`] enum plus the generic operand
//! fields. Decoding never fails; any primary opcode outside the instruction set
//! becomes [`Opcode::Unknown`] and is rejected later by dispatch.

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Supported operations, one variant per primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Stop the simulation.
    Halt,
    /// Load word at `sext16(reg[s1] + reg[s2])`.
    LoadIndexed,
    /// Load word at `sext16((genset & !1) + reg[s2])`.
    LoadImmediate,
    /// Store `reg[s1]` at the 4-bit displacement plus `reg[s2]`.
    StoreImmediate,
    /// Branch if `reg[s1] != reg[s2]`.
    Btne,
    /// Branch if the 5-bit immediate differs from `reg[s2]`.
    BtneImmediate,
    /// Branch if `reg[s1] == reg[s2]`.
    Bte,
    /// Branch if the 5-bit immediate equals `reg[s2]`.
    BteImmediate,
    /// Unconditional branch.
    Br,
    /// Branch if the condition-code bit is set.
    Bc,
    /// Branch if the condition-code bit is clear.
    Bnc,
    /// `reg[d] = reg[s1] + reg[s2]`, sets the condition code.
    Adds,
    /// `reg[d] = reg[s2] + sext16(genset)`, sets the condition code.
    AddsImmediate,
    /// `reg[d] = reg[s1] - reg[s2]`, sets the condition code.
    Subs,
    /// `reg[d] = sext16(genset) - reg[s2]`, sets the condition code.
    SubsImmediate,
    /// Shift left by a register count.
    Shl,
    /// Shift left by an immediate count.
    ShlImmediate,
    /// Logical shift right by a register count.
    Shr,
    /// Logical shift right by an immediate count.
    ShrImmediate,
    /// Arithmetic shift right by a register count.
    Shra,
    /// Arithmetic shift right by an immediate count.
    ShraImmediate,
    /// Any primary opcode outside the instruction set.
    Unknown(u8),
}

impl Opcode {
    /// Maps a 6-bit primary opcode onto its variant.
    ///
    /// Values without a defined instruction map to [`Opcode::Unknown`].
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            opcodes::OP_HALT => Self::Halt,
            opcodes::OP_LD => Self::LoadIndexed,
            opcodes::OP_LD_IMM => Self::LoadImmediate,
            opcodes::OP_ST => Self::StoreImmediate,
            opcodes::OP_BTNE => Self::Btne,
            opcodes::OP_BTNE_IMM => Self::BtneImmediate,
            opcodes::OP_BTE => Self::Bte,
            opcodes::OP_BTE_IMM => Self::BteImmediate,
            opcodes::OP_BR => Self::Br,
            opcodes::OP_BC => Self::Bc,
            opcodes::OP_BNC => Self::Bnc,
            opcodes::OP_ADDS => Self::Adds,
            opcodes::OP_ADDS_IMM => Self::AddsImmediate,
            opcodes::OP_SUBS => Self::Subs,
            opcodes::OP_SUBS_IMM => Self::SubsImmediate,
            opcodes::OP_SHL => Self::Shl,
            opcodes::OP_SHL_IMM => Self::ShlImmediate,
            opcodes::OP_SHR => Self::Shr,
            opcodes::OP_SHR_IMM => Self::ShrImmediate,
            opcodes::OP_SHRA => Self::Shra,
            opcodes::OP_SHRA_IMM => Self::ShraImmediate,
            other => Self::Unknown(other),
        }
    }

    /// Returns the 6-bit primary opcode value of this variant.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Halt => opcodes::OP_HALT,
            Self::LoadIndexed => opcodes::OP_LD,
            Self::LoadImmediate => opcodes::OP_LD_IMM,
            Self::StoreImmediate => opcodes::OP_ST,
            Self::Btne => opcodes::OP_BTNE,
            Self::BtneImmediate => opcodes::OP_BTNE_IMM,
            Self::Bte => opcodes::OP_BTE,
            Self::BteImmediate => opcodes::OP_BTE_IMM,
            Self::Br => opcodes::OP_BR,
            Self::Bc => opcodes::OP_BC,
            Self::Bnc => opcodes::OP_BNC,
            Self::Adds => opcodes::OP_ADDS,
            Self::AddsImmediate => opcodes::OP_ADDS_IMM,
            Self::Subs => opcodes::OP_SUBS,
            Self::SubsImmediate => opcodes::OP_SUBS_IMM,
            Self::Shl => opcodes::OP_SHL,
            Self::ShlImmediate => opcodes::OP_SHL_IMM,
            Self::Shr => opcodes::OP_SHR,
            Self::ShrImmediate => opcodes::OP_SHR_IMM,
            Self::Shra => opcodes::OP_SHRA,
            Self::ShraImmediate => opcodes::OP_SHRA_IMM,
            Self::Unknown(bits) => bits,
        }
    }

    /// Assembly mnemonic used in traces.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::LoadIndexed | Self::LoadImmediate => "ld.l",
            Self::StoreImmediate => "st.l",
            Self::Btne => "btne",
            Self::BtneImmediate => "btnei",
            Self::Bte => "bte",
            Self::BteImmediate => "btei",
            Self::Br => "br",
            Self::Bc => "bc",
            Self::Bnc => "bnc",
            Self::Adds | Self::AddsImmediate => "adds",
            Self::Subs | Self::SubsImmediate => "subs",
            Self::Shl => "shl",
            Self::ShlImmediate => "shli",
            Self::Shr => "shr",
            Self::ShrImmediate => "shri",
            Self::Shra => "shra",
            Self::ShraImmediate => "shrai",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// A decoded instruction: opcode variant plus the generic operand fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// Operation selected by the primary opcode.
    pub opcode: Opcode,
    /// Destination register index.
    pub d: usize,
    /// Source-1 register index.
    pub s1: usize,
    /// Source-2 register index.
    pub s2: usize,
    /// 16-bit generic immediate/offset, zero-extended.
    pub genset: u32,
}

/// Decodes a raw instruction word.
///
/// Pure and total: every 32-bit input yields a `Decoded`.
#[inline]
pub fn decode(word: u32) -> Decoded {
    Decoded {
        raw: word,
        opcode: Opcode::from_bits(word.opcode()),
        d: word.d(),
        s1: word.s1(),
        s2: word.s2(),
        genset: word.genset(),
    }
}
