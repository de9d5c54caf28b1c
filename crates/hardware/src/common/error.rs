//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Run Errors:** Fatal invariant violations and unrecognized opcodes that end a run.
//! 2. **Loader Errors:** Problems reading or validating the initial memory image.
//! 3. **Configuration Errors:** Problems reading or parsing a JSON configuration file.
//!
//! No error is retryable. Every run error terminates the simulation; the caller
//! decides how to surface it (the CLI maps them to process exit statuses).

use thiserror::Error;

use super::constants::{EXIT_FATAL, EXIT_UNKNOWN_OPCODE};
use super::data::AccessType;

/// Conditions that terminate a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A fetch, load, or store computed a word index outside of memory.
    #[error(
        "{access} access at address {addr:#x} (word index {word_index}) is outside memory of {capacity} words"
    )]
    AddressOutOfBounds {
        /// Kind of access that failed.
        access: AccessType,
        /// Byte address that was accessed.
        addr: i32,
        /// Word index derived from `addr`.
        word_index: i32,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// A branch whose encoding requires a non-zero displacement carried zero.
    #[error("branch at {pc:#x} ({word:#010x}) has a zero displacement")]
    ZeroDisplacement {
        /// Address of the offending branch.
        pc: u32,
        /// Raw instruction word.
        word: u32,
    },

    /// The primary opcode is not part of the instruction set.
    #[error("unknown instruction {word:08x} at {pc:#x}: op1={opcode:x} d={d:x} s1={s1:x} s2={s2:x}")]
    UnknownOpcode {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction word.
        word: u32,
        /// Decoded 6-bit primary opcode.
        opcode: u8,
        /// Destination register field.
        d: usize,
        /// Source-1 register field.
        s1: usize,
        /// Source-2 register field.
        s2: usize,
    },

    /// The configured instruction budget ran out before a halt executed.
    #[error("instruction limit of {limit} reached without a halt")]
    InstructionLimit {
        /// Configured maximum number of executed instructions.
        limit: u64,
    },
}

impl SimError {
    /// Process exit status for this error.
    ///
    /// Unrecognized opcodes exit with a plain non-zero status; every other
    /// condition is an invariant violation and uses the abort status.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownOpcode { .. } => EXIT_UNKNOWN_OPCODE,
            _ => EXIT_FATAL,
        }
    }
}

/// Errors produced while loading the initial memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image holds more words than the loader accepts.
    #[error("too many words loaded (limit is {limit})")]
    TooManyWords {
        /// Maximum number of words accepted.
        limit: usize,
    },

    /// A token could not be parsed as a hexadecimal 32-bit word.
    #[error("line {line}: '{token}' is not a hexadecimal word")]
    InvalidWord {
        /// One-based line number of the token.
        line: usize,
        /// Offending token text.
        token: String,
    },

    /// The image source could not be read.
    #[error("could not read memory image: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
