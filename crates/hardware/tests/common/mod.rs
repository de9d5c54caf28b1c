//! Shared test infrastructure.

/// Instruction encoders.
pub mod builder;


pub use builder::instruction::InstructionBuilder;
pub use harness::TestContext;
