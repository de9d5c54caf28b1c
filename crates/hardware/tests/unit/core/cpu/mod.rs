//! CPU tests: per-opcode semantics and end-to-end runs.

pub mod memory;
