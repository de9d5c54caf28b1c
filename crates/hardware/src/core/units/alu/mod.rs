//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execution engine.
//! All operands and results are 32-bit two's-complement values and all
//! arithmetic wraps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, and the condition-code comparisons
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations and condition-code rules.
pub mod arithmetic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction (`a - b`).
    Sub,
    /// Shift left logical.
    Sll,
    /// Shift right logical (zero fill).
    Srl,
    /// Shift right arithmetic (sign fill).
    Sra,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand; the value being shifted for shift operations
    /// * `b`  - Second operand; the shift count for shift operations
    ///
    /// # Examples
    ///
    /// ```
    /// use i860sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, -3), 2);
    /// assert_eq!(Alu::execute(AluOp::Sub, i32::MIN, 1), i32::MAX);
    /// assert_eq!(Alu::execute(AluOp::Sra, -16, 2), -4);
    /// assert_eq!(Alu::execute(AluOp::Srl, -16, 28), 0xF);
    /// ```
    #[inline]
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::Sll => shifts::sll(a, b as u32),
            AluOp::Srl => shifts::srl(a, b as u32),
            AluOp::Sra => shifts::sra(a, b as u32),
        }
    }
}
