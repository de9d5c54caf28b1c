//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory capacity, instruction width, and cache geometry.
//! 2. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Fatal run errors, loader errors, and configuration errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for execution, loading, and configuration.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, MEM_SIZE_IN_WORDS, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, LoadError, SimError};
