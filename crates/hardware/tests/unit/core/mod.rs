//! Tests for the CPU core.


/// Instruction execution and memory path tests.
pub mod cpu;
