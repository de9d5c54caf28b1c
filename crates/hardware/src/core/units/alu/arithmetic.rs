//! ALU arithmetic operations.
//!
//! Implements wrapping 32-bit addition and subtraction, plus the two
//! comparisons that define the condition-code bit. The condition code is not
//! a hardware carry flag: `adds` compares one operand against the
//! two's-complement negation of the other, and `subs` uses a plain signed
//! greater-than. Both comparisons are signed.

/// Wrapping 32-bit addition.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit subtraction, `a - b`.
#[inline]
pub const fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Condition code produced by the add instructions.
///
/// True when `value < -other`, with the negation computed as `!other + 1`
/// in wrapping arithmetic (so `-i32::MIN == i32::MIN`).
#[inline]
pub const fn add_condition(value: i32, other: i32) -> bool {
    value < other.wrapping_neg()
}

/// Condition code produced by the subtract instructions.
///
/// True when `value > other`.
#[inline]
pub const fn sub_condition(value: i32, other: i32) -> bool {
    value > other
}
