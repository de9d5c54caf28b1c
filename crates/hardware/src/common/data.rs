//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Cache Classification:** Reads and writes are counted separately and writes set the dirty bit.
//! 2. **Fault Reporting:** Out-of-range accesses report which kind of access failed.
//! 3. **Statistics Tracking:** Fetches, data reads, and data writes feed distinct counters.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch through the fetch pointer.
    ///
    /// Fetches bypass the cache model and only count as instruction fetches.
    Fetch,

    /// Data read access performed by a load instruction.
    Read,

    /// Data write access performed by a store instruction.
    ///
    /// Marks the selected cache line dirty.
    Write,
}

impl AccessType {
    /// Returns `true` for data writes.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
