//! i860-subset functional simulator library.
//!
//! This crate implements an instruction interpreter for a small i860-style
//! integer instruction set, coupled to a set-associative cache model:
//! 1. **ISA:** Field extraction, opcode decoding, and disassembly of 32-bit instruction words.
//! 2. **Core:** Register file, condition code, ALU, branch resolution, and per-opcode execution.
//! 3. **Cache:** An 8-set, 4-way access classifier with table-driven pseudo-LRU replacement.
//! 4. **Memory:** A flat, bounds-checked array of 32-bit words.
//! 5. **Simulation:** Image loader, configuration, run driver, and statistics.

/// Common types and constants (access types, errors, geometry).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (registers, execution units, cache model, execution).
pub mod core;
/// Instruction set (opcodes, field extraction, decode, disassembly).
pub mod isa;
/// Image loader and run driver.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, cache model, and stats.
pub use crate::core::Cpu;
/// Top-level simulator owning the CPU.
pub use crate::sim::Simulator;
