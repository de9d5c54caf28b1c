//! Core processor implementation.
//!
//! This module contains the machine-state aggregate (`Cpu`), the architectural
//! register file, and the functional units it drives: the ALU, the branch unit,
//! and the cache model.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU state aggregate, instruction dispatch, and memory access paths.
pub mod cpu;

/// Functional units (ALU, branch unit, cache model).
pub mod units;

pub use self::cpu::Cpu;
