//! Memory Access Helpers.
//!
//! This module provides the interface between the load/store handlers and the
//! memory subsystem. Every data access performs the following, in order:
//! 1. **Cache Classification:** The cache model (if enabled) sees the effective address first.
//! 2. **Bounds Check:** The word index is validated against memory capacity.
//! 3. **Transfer:** The word is read or written.
//! 4. **Accounting:** The data read/write counter is incremented.
//!
//! Because classification comes first, an out-of-range access is still
//! counted by the cache before the run aborts.

use tracing::{debug, warn};

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::SimError;
use crate::core::units::cache::CacheAccess;

/// Record of one data access, kept for per-instruction reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemAccess {
    /// Read or write.
    pub kind: AccessType,
    /// Effective byte address.
    pub addr: i32,
    /// Cache classification, when cache modeling is enabled.
    pub cache: Option<CacheAccess>,
}

impl Cpu {
    /// Runs the cache model and records the access in `last_access`.
    fn classify(&mut self, addr: i32, kind: AccessType) {
        let cache = self.cache.as_mut().map(|c| c.access(addr as u32, kind));
        self.last_access = Some(MemAccess { kind, addr, cache });
        debug!(addr = format_args!("{addr:#x}"), "{kind} access");
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// Fetches bypass the cache model.
    pub fn fetch(&self, pc: u32) -> Result<u32, SimError> {
        self.mem
            .read(pc as i32, AccessType::Fetch)
            .map(|word| word as u32)
            .inspect_err(|e| warn!("{e}"))
    }

    /// Loads the word at effective address `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective byte address.
    ///
    /// # Returns
    ///
    /// The loaded word, or `AddressOutOfBounds`.
    pub fn read_mem(&mut self, addr: i32) -> Result<i32, SimError> {
        self.classify(addr, AccessType::Read);
        let val = self
            .mem
            .read(addr, AccessType::Read)
            .inspect_err(|e| warn!("{e}"))?;
        self.stats.memory_reads += 1;
        Ok(val)
    }

    /// Stores `val` at effective address `addr`.
    pub fn write_mem(&mut self, addr: i32, val: i32) -> Result<(), SimError> {
        self.classify(addr, AccessType::Write);
        self.mem.write(addr, val).inspect_err(|e| warn!("{e}"))?;
        self.stats.memory_writes += 1;
        Ok(())
    }
}
