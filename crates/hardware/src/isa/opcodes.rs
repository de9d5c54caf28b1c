//! Primary Opcodes.
//!
//! Defines the 6-bit primary opcode values (bits 31-26) of every supported
//! instruction. Any value not listed here is an unrecognized opcode.

/// Stop the simulation.
pub const OP_HALT: u8 = 0x00;

/// Load word, indexed: `ld.l r(s1)(r(s2)),r(d)`.
pub const OP_LD: u8 = 0x04;

/// Load word, immediate offset: `ld.l imm(r(s2)),r(d)`.
pub const OP_LD_IMM: u8 = 0x05;

/// Store word, immediate offset: `st.l r(s1),disp(r(s2))`.
pub const OP_ST: u8 = 0x07;

/// Branch if registers are not equal.
pub const OP_BTNE: u8 = 0x14;

/// Branch if immediate and register are not equal.
pub const OP_BTNE_IMM: u8 = 0x15;

/// Branch if registers are equal.
pub const OP_BTE: u8 = 0x16;

/// Branch if immediate and register are equal.
pub const OP_BTE_IMM: u8 = 0x17;

/// Unconditional branch.
pub const OP_BR: u8 = 0x1a;

/// Branch if the condition-code bit is set.
pub const OP_BC: u8 = 0x1c;

/// Branch if the condition-code bit is clear.
pub const OP_BNC: u8 = 0x1e;

/// Add, signed, register operands.
pub const OP_ADDS: u8 = 0x24;

/// Add, signed, immediate operand.
pub const OP_ADDS_IMM: u8 = 0x25;

/// Subtract, signed, register operands.
pub const OP_SUBS: u8 = 0x26;

/// Subtract, signed, immediate operand.
pub const OP_SUBS_IMM: u8 = 0x27;

/// Shift left, register count.
pub const OP_SHL: u8 = 0x28;

/// Shift left, immediate count.
pub const OP_SHL_IMM: u8 = 0x29;

/// Shift right logical, register count.
pub const OP_SHR: u8 = 0x2a;

/// Shift right logical, immediate count.
pub const OP_SHR_IMM: u8 = 0x2b;

/// Shift right arithmetic, register count.
pub const OP_SHRA: u8 = 0x2e;

/// Shift right arithmetic, immediate count.
pub const OP_SHRA_IMM: u8 = 0x2f;
