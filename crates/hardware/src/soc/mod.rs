//! System-on-Chip (SoC) Components.
//!
//! The simulated machine has a single memory device: a flat array of 32-bit
//! words holding both the program and its data.

/// Word-addressed main memory.
pub mod memory;

pub use memory::Memory;
