//! ALU tests.

pub mod shifts;
