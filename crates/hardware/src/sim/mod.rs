//! Simulation driver and program loading.
//!
//! Provides the hex memory-image loader and the [`Simulator`] that owns the
//! CPU and runs it to completion.

/// Hex memory-image parsing.
pub mod loader;

/// Top-level simulator and run reporting.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StepOutcome};
