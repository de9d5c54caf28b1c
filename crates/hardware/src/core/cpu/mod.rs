//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which is the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, condition code, and fetch/execute pointers.
//! 2. **Memory Hierarchy:** Owns main memory and the optional cache model placed in front of it.
//! 3. **Statistics:** Accumulates execution counters for the end-of-run report.

/// Fetch, decode, and per-opcode execution.
pub mod execution;

/// Load/store helpers that route data accesses through the cache model.
pub mod memory;

pub use memory::MemAccess;

use std::fmt;

use crate::config::{Config, StoreAddressing};
use crate::core::arch::Gpr;
use crate::core::units::cache::CacheSim;
use crate::soc::Memory;
use crate::stats::{CacheStats, SimStats};

/// Main CPU structure containing all architectural and bookkeeping state.
///
/// One `Cpu` is owned by one [`crate::sim::Simulator`]; nothing else mutates it.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers.
    pub regs: Gpr,
    /// Condition-code bit written by `adds`/`subs` and read by `bc`/`bnc`.
    pub cc: bool,
    /// Fetch pointer: byte address of the next instruction.
    pub fip: u32,
    /// Execute pointer: byte address of the instruction being executed.
    pub xip: u32,
    /// Set once a `halt` has executed.
    pub halted: bool,

    /// Main memory.
    pub mem: Memory,
    /// Cache model, absent when cache modeling is disabled.
    pub cache: Option<CacheSim>,

    /// Effective-address variant used by `st.l`.
    pub store_addressing: StoreAddressing,
    /// Execution counters.
    pub stats: SimStats,
    /// Data access performed by the most recent instruction, if any.
    pub last_access: Option<MemAccess>,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// Registers, condition code, and pointers are zero; memory is zero-filled;
    /// the cache (when enabled) starts with every line invalid.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration.
    pub fn new(config: &Config) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| CacheSim::new(&config.cache));

        Self {
            regs: Gpr::new(),
            cc: false,
            fip: 0,
            xip: 0,
            halted: false,
            mem: Memory::new(config.memory.size_words),
            cache,
            store_addressing: config.execution.store_addressing,
            stats: SimStats::default(),
            last_access: None,
        }
    }

    /// Returns the cache counters, or `None` when cache modeling is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| *cache.stats())
    }

    /// Returns a printable snapshot of the register file and condition code.
    pub const fn register_dump(&self) -> RegisterDump<'_> {
        RegisterDump {
            regs: &self.regs,
            cc: self.cc,
        }
    }
}

/// Register file plus condition code, rendered in the trace layout.
#[derive(Clone, Copy, Debug)]
pub struct RegisterDump<'a> {
    regs: &'a Gpr,
    cc: bool,
}

impl fmt::Display for RegisterDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.regs)?;
        writeln!(f, "  cc: {:x}", u8::from(self.cc))
    }
}
