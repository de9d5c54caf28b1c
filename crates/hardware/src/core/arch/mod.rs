//! Architectural state.
//!
//! The only architectural storage besides memory is the general-purpose
//! register file; the condition-code bit and the instruction pointers live
//! directly on [`crate::core::Cpu`].

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
