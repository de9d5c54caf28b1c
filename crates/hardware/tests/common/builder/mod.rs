//! Builders for test inputs.

/// Fluent encoder for instruction words.
pub mod instruction;
