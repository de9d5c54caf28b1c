//! ALU shift operations.
//!
//! Implements shift-left logical, shift-right logical, and shift-right
//! arithmetic on 32-bit values. Only the low five bits of the count are
//! meaningful; larger counts wrap modulo 32.

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Shift left logical.
#[inline]
pub const fn sll(value: i32, amount: u32) -> i32 {
    value.wrapping_shl(amount & SHAMT_MASK)
}

/// Shift right logical (zero fill).
#[inline]
pub const fn srl(value: i32, amount: u32) -> i32 {
    ((value as u32) >> (amount & SHAMT_MASK)) as i32
}

/// Shift right arithmetic (sign fill).
#[inline]
pub const fn sra(value: i32, amount: u32) -> i32 {
    value >> (amount & SHAMT_MASK)
}
