//! Execution units and functional components.
//!
//! This module contains the functional units the CPU drives while executing
//! an instruction: the integer ALU, the branch resolution unit, and the
//! set-associative cache model that classifies data accesses.

/// Arithmetic Logic Unit for add, subtract, and shift operations.
pub mod alu;

/// Branch resolution: condition evaluation and target computation.
pub mod bru;

/// Set-associative cache model with pluggable replacement policies.
pub mod cache;
