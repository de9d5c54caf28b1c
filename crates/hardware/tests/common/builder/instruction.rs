use i860sim_core::isa::opcodes::*;

/// Fluent encoder for 32-bit instruction words.
///
/// Field layout: opcode 31-26, s2 25-21, d 20-16, s1 15-11, low field 10-0
/// (or the whole 16-bit immediate 15-0 when `genset` is used).
#[derive(Debug, Default, Clone, Copy)]
pub struct InstructionBuilder {
    opcode: u8,
    d: u32,
    s1: u32,
    s2: u32,
    low: u32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u8) -> Self {
        self.opcode = op;
        self
    }

    pub fn d(mut self, d: u32) -> Self {
        self.d = d;
        self
    }

    pub fn s1(mut self, s1: u32) -> Self {
        self.s1 = s1;
        self
    }

    pub fn s2(mut self, s2: u32) -> Self {
        self.s2 = s2;
        self
    }

    /// Sets the full 16-bit immediate; do not combine with `s1`.
    pub fn genset(mut self, imm: u16) -> Self {
        self.low = u32::from(imm);
        self
    }

    /// Splits a 16-bit branch displacement across bits 20-16 and 10-0.
    pub fn split_disp(mut self, disp: i16) -> Self {
        let raw = u32::from(disp as u16);
        self.d = raw >> 11;
        self.low = raw & 0x7ff;
        self
    }

    pub fn build(self) -> u32 {
        (u32::from(self.opcode) << 26)
            | ((self.s2 & 0x1f) << 21)
            | ((self.d & 0x1f) << 16)
            | ((self.s1 & 0x1f) << 11)
            | self.low
    }

    // --- Helpers for Common Instructions ---

    pub fn halt() -> u32 {
        Self::new().opcode(OP_HALT).build()
    }

    pub fn adds(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_ADDS, s1, s2, d)
    }

    pub fn adds_imm(imm: i16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_ADDS_IMM, imm as u16, s2, d)
    }

    pub fn subs(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_SUBS, s1, s2, d)
    }

    pub fn subs_imm(imm: i16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_SUBS_IMM, imm as u16, s2, d)
    }

    pub fn shl(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_SHL, s1, s2, d)
    }

    pub fn shl_imm(count: u16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_SHL_IMM, count, s2, d)
    }

    pub fn shr(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_SHR, s1, s2, d)
    }

    pub fn shr_imm(count: u16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_SHR_IMM, count, s2, d)
    }

    pub fn shra(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_SHRA, s1, s2, d)
    }

    pub fn shra_imm(count: u16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_SHRA_IMM, count, s2, d)
    }

    /// `ld.l r(s1)(r(s2)),r(d)`
    pub fn ld(s1: u32, s2: u32, d: u32) -> u32 {
        Self::rrr(OP_LD, s1, s2, d)
    }

    /// `ld.l offset(r(s2)),r(d)`
    pub fn ld_imm(offset: i16, s2: u32, d: u32) -> u32 {
        Self::imm(OP_LD_IMM, offset as u16, s2, d)
    }

    /// `st.l r(s1),disp(r(s2))` with a 4-bit displacement.
    pub fn st(s1: u32, disp: u32, s2: u32) -> u32 {
        Self::new()
            .opcode(OP_ST)
            .s1(s1)
            .s2(s2)
            .build()
            | (disp & 0xf)
    }

    pub fn br(disp: i32) -> u32 {
        Self::long(OP_BR, disp)
    }

    pub fn bc(disp: i32) -> u32 {
        Self::long(OP_BC, disp)
    }

    pub fn bnc(disp: i32) -> u32 {
        Self::long(OP_BNC, disp)
    }

    pub fn btne(s1: u32, s2: u32, disp: i16) -> u32 {
        Self::split(OP_BTNE, s1, s2, disp)
    }

    pub fn btnei(value: u32, s2: u32, disp: i16) -> u32 {
        Self::split(OP_BTNE_IMM, value, s2, disp)
    }

    pub fn bte(s1: u32, s2: u32, disp: i16) -> u32 {
        Self::split(OP_BTE, s1, s2, disp)
    }

    pub fn btei(value: u32, s2: u32, disp: i16) -> u32 {
        Self::split(OP_BTE_IMM, value, s2, disp)
    }

    fn rrr(op: u8, s1: u32, s2: u32, d: u32) -> u32 {
        Self::new().opcode(op).s1(s1).s2(s2).d(d).build()
    }

    fn imm(op: u8, imm: u16, s2: u32, d: u32) -> u32 {
        Self::new().opcode(op).genset(imm).s2(s2).d(d).build()
    }

    fn long(op: u8, disp: i32) -> u32 {
        (u32::from(op) << 26) | (disp as u32 & 0x03ff_ffff)
    }

    fn split(op: u8, s1: u32, s2: u32, disp: i16) -> u32 {
        Self::new()
            .opcode(op)
            .s1(s1)
            .s2(s2)
            .split_disp(disp)
            .build()
    }
}
