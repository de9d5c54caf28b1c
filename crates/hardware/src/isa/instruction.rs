//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed 32-bit instruction layout,
//! plus the opcode-specific displacement fields and the sign-extension helpers
//! the execution engine applies to them.

/// Bit shift for the primary opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode field after shifting (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the destination register field (bits 20-16).
pub const D_SHIFT: u32 = 16;
/// Bit shift for the source-1 register field (bits 15-11).
pub const S1_SHIFT: u32 = 11;
/// Bit shift for the source-2 register field (bits 25-21).
pub const S2_SHIFT: u32 = 21;
/// Bit mask for any register field after shifting (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit generic immediate/offset field (bits 15-0).
pub const GENSET_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit branch displacement (bits 25-0).
pub const DISP26_MASK: u32 = 0x03FF_FFFF;
/// Bit mask for the low 11 bits of a split branch displacement (bits 10-0).
pub const SPLIT_LOW_MASK: u32 = 0x7FF;
/// Position of the high 5 bits within a reassembled split displacement.
pub const SPLIT_HIGH_POS: u32 = 11;
/// Bit mask for the store displacement (bits 3-0).
pub const STORE_DISP_MASK: u32 = 0xF;
/// Control bit that, together with bit 0, clears bit 0 of the store displacement.
pub const STORE_ALIGN_BIT: u32 = 28;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is a pure bit slice; no field is validated here.
pub trait InstructionBits {
    /// Extracts the 6-bit primary opcode (bits 31-26).
    fn opcode(&self) -> u8;

    /// Extracts the destination register index (bits 20-16).
    fn d(&self) -> usize;

    /// Extracts the source-1 register index (bits 15-11).
    ///
    /// The immediate-compare branches reuse this field as a 5-bit unsigned
    /// compare value.
    fn s1(&self) -> usize;

    /// Extracts the source-2 register index (bits 25-21).
    fn s2(&self) -> usize;

    /// Extracts the 16-bit generic immediate/offset field, zero-extended.
    fn genset(&self) -> u32;

    /// Extracts the raw 26-bit branch displacement (bits 25-0).
    fn disp26(&self) -> u32;

    /// Reassembles the split 16-bit branch displacement.
    ///
    /// Bits 20-16 supply the high five bits and bits 10-0 the low eleven.
    fn split_disp(&self) -> u32;

    /// Extracts the 4-bit store displacement with its alignment control applied.
    ///
    /// When bit 28 and bit 0 are both set, bit 0 of the displacement is cleared.
    fn store_disp(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn d(&self) -> usize {
        ((self >> D_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn s1(&self) -> usize {
        ((self >> S1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn s2(&self) -> usize {
        ((self >> S2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn genset(&self) -> u32 {
        self & GENSET_MASK
    }

    #[inline(always)]
    fn disp26(&self) -> u32 {
        self & DISP26_MASK
    }

    #[inline(always)]
    fn split_disp(&self) -> u32 {
        (((self >> D_SHIFT) & REG_MASK) << SPLIT_HIGH_POS) | (self & SPLIT_LOW_MASK)
    }

    #[inline(always)]
    fn store_disp(&self) -> u32 {
        let disp = self & STORE_DISP_MASK;
        if (self >> STORE_ALIGN_BIT) & 1 == 1 && self & 1 == 1 {
            disp & !1
        } else {
            disp
        }
    }
}

/// Sign-extends the low 16 bits of `value` to 32 bits.
#[inline(always)]
pub const fn sext16(value: u32) -> i32 {
    value as u16 as i16 as i32
}

/// Sign-extends the low 26 bits of `value` to 32 bits.
#[inline(always)]
pub const fn sext26(value: u32) -> i32 {
    ((value << 6) as i32) >> 6
}
