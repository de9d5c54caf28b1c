//! Instruction Execution.
//!
//! This module implements the interpreter cycle of the CPU. Each step performs:
//! 1. **Fetch:** Reads the word at the fetch pointer and advances it by four before dispatch.
//! 2. **Decode:** Splits the word into an [`Opcode`] and operand fields.
//! 3. **Dispatch:** Runs the per-opcode semantics through the ALU, BRU, and memory helpers.
//! 4. **Retire:** Forces `r0` back to zero, even when the instruction failed.

use tracing::{debug, warn};

use super::Cpu;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::SimError;
use crate::config::StoreAddressing;
use crate::core::units::alu::arithmetic::{add_condition, sub_condition};
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::{self, Condition};
use crate::isa::decode::{Decoded, Opcode, decode};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{InstructionBits, sext16, sext26};

/// Clears bit 0 of the `ld.l` immediate offset.
const LOAD_OFFSET_ALIGN_MASK: u32 = 0xFFFE;

/// Low byte kept by the byte-masked store addressing variant.
const STORE_BYTE_MASK: i32 = 0xFF;

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The decoded instruction that was executed, or the error that ended
    /// the run. On error the fetch pointer has already advanced past the
    /// faulting instruction and `xip` still points at it.
    pub fn step(&mut self) -> Result<Decoded, SimError> {
        let pc = self.fip;
        let word = self.fetch(pc)?;
        self.xip = pc;
        self.fip = pc.wrapping_add(INSTRUCTION_SIZE);
        self.stats.inst_fetches += 1;
        self.last_access = None;

        let inst = decode(word);
        debug!(pc = format_args!("{pc:02x}"), "{}", disassemble(word));

        let result = self.execute(&inst);
        self.regs.clear_zero();
        result.map(|()| inst)
    }

    fn execute(&mut self, inst: &Decoded) -> Result<(), SimError> {
        let (d, s1, s2) = (inst.d, inst.s1, inst.s2);

        match inst.opcode {
            Opcode::Halt => self.halted = true,

            Opcode::LoadIndexed => {
                let sum = self.regs.read(s1).wrapping_add(self.regs.read(s2));
                let val = self.read_mem(sext16(sum as u32))?;
                self.regs.write(d, val);
            }
            Opcode::LoadImmediate => {
                let offset = (inst.genset & LOAD_OFFSET_ALIGN_MASK) as i32;
                let sum = offset.wrapping_add(self.regs.read(s2));
                let val = self.read_mem(sext16(sum as u32))?;
                self.regs.write(d, val);
            }
            Opcode::StoreImmediate => {
                let sum = (inst.raw.store_disp() as i32).wrapping_add(self.regs.read(s2));
                let addr = match self.store_addressing {
                    StoreAddressing::SignExtend16 => sext16(sum as u32),
                    StoreAddressing::ByteMasked => sum & STORE_BYTE_MASK,
                };
                self.write_mem(addr, self.regs.read(s1))?;
            }

            Opcode::Adds => {
                let old_s2 = self.regs.read(s2);
                let sum = Alu::execute(AluOp::Add, self.regs.read(s1), old_s2);
                self.regs.write(d, sum);
                self.cc = add_condition(old_s2, self.regs.read(s1));
            }
            Opcode::AddsImmediate => {
                let imm = sext16(inst.genset);
                let sum = Alu::execute(AluOp::Add, self.regs.read(s2), imm);
                self.regs.write(d, sum);
                self.cc = add_condition(self.regs.read(s2), imm);
            }
            Opcode::Subs => {
                let diff = Alu::execute(AluOp::Sub, self.regs.read(s1), self.regs.read(s2));
                self.regs.write(d, diff);
                self.cc = sub_condition(self.regs.read(s2), self.regs.read(s1));
            }
            Opcode::SubsImmediate => {
                let imm = sext16(inst.genset);
                let diff = Alu::execute(AluOp::Sub, imm, self.regs.read(s2));
                self.regs.write(d, diff);
                self.cc = sub_condition(self.regs.read(s2), imm);
            }

            Opcode::Shl => self.shift(AluOp::Sll, d, s2, self.regs.read(s1)),
            Opcode::ShlImmediate => self.shift(AluOp::Sll, d, s2, inst.genset as i32),
            Opcode::Shr => self.shift(AluOp::Srl, d, s2, self.regs.read(s1)),
            Opcode::ShrImmediate => self.shift(AluOp::Srl, d, s2, inst.genset as i32),
            Opcode::Shra => self.shift(AluOp::Sra, d, s2, self.regs.read(s1)),
            Opcode::ShraImmediate => self.shift(AluOp::Sra, d, s2, inst.genset as i32),

            Opcode::Br => self.branch_direct(inst, Condition::Always)?,
            Opcode::Bc => self.branch_direct(inst, Condition::Carry(self.cc))?,
            Opcode::Bnc => self.branch_direct(inst, Condition::NoCarry(self.cc))?,

            Opcode::Btne => {
                let cond = Condition::NotEqual(self.regs.read(s1), self.regs.read(s2));
                self.branch_compare(inst, cond)?;
            }
            Opcode::BtneImmediate => {
                let cond = Condition::NotEqual(s1 as i32, self.regs.read(s2));
                self.branch_compare(inst, cond)?;
            }
            Opcode::Bte => {
                let cond = Condition::Equal(self.regs.read(s1), self.regs.read(s2));
                self.branch_compare(inst, cond)?;
            }
            Opcode::BteImmediate => {
                let cond = Condition::Equal(s1 as i32, self.regs.read(s2));
                self.branch_compare(inst, cond)?;
            }

            Opcode::Unknown(opcode) => {
                let err = SimError::UnknownOpcode {
                    pc: self.xip,
                    word: inst.raw,
                    opcode,
                    d,
                    s1,
                    s2,
                };
                warn!("{err}");
                return Err(err);
            }
        }
        Ok(())
    }

    /// `reg[d] = reg[s2] <op> amount`.
    fn shift(&mut self, op: AluOp, d: usize, s2: usize, amount: i32) {
        let val = Alu::execute(op, self.regs.read(s2), amount);
        self.regs.write(d, val);
    }

    /// Branches with a 26-bit displacement (`br`, `bc`, `bnc`).
    ///
    /// The displacement must be non-zero whenever the branch is taken.
    fn branch_direct(&mut self, inst: &Decoded, cond: Condition) -> Result<(), SimError> {
        self.stats.branches += 1;
        let raw = inst.raw.disp26();
        if raw == 0 && cond.holds() {
            return Err(self.zero_displacement(inst));
        }
        self.take_branch(cond, sext26(raw));
        Ok(())
    }

    /// Branches with a split 16-bit displacement (`btne`, `bte` and their
    /// immediate forms).
    ///
    /// The displacement must be non-zero on every execution.
    fn branch_compare(&mut self, inst: &Decoded, cond: Condition) -> Result<(), SimError> {
        self.stats.branches += 1;
        let raw = inst.raw.split_disp();
        if raw == 0 {
            return Err(self.zero_displacement(inst));
        }
        self.take_branch(cond, sext16(raw));
        Ok(())
    }

    fn take_branch(&mut self, cond: Condition, disp: i32) {
        let outcome = bru::resolve(cond, self.fip, disp);
        if outcome.taken {
            self.stats.taken += 1;
            debug!(
                from = format_args!("{:#x}", self.xip),
                to = format_args!("{:#x}", outcome.next_fip),
                "branch taken"
            );
            self.fip = outcome.next_fip;
        }
    }

    fn zero_displacement(&self, inst: &Decoded) -> SimError {
        let err = SimError::ZeroDisplacement {
            pc: self.xip,
            word: inst.raw,
        };
        warn!("{err}");
        err
    }
}
