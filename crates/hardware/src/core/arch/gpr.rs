//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`r0`-`r31`).
//! 2. **Invariant Enforcement:** `r0` is forced back to zero after every instruction.
//! 3. **Debugging:** Renders the register state in the trace layout.
//!
//! Unlike a hardwired-zero file, writes to `r0` land during an instruction and
//! stay visible to later reads in that same instruction; the CPU calls
//! [`Gpr::clear_zero`] once the instruction finishes.

use std::fmt;

use crate::common::constants::{NUM_REGS, REG_ZERO};

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx & (NUM_REGS - 1)]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx & (NUM_REGS - 1)] = val;
    }

    /// Forces `r0` back to zero.
    #[inline(always)]
    pub fn clear_zero(&mut self) {
        self.regs[REG_ZERO] = 0;
    }

    /// Returns a copy of all 32 registers.
    pub fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    /// Four registers per row, eight rows, register numbers in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..8 {
            for col in 0..4 {
                let r = i + col * 8;
                write!(f, "  r{:x}: {:08x}", r, self.regs[r])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
