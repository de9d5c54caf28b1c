//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters observed while a program runs. It provides:
//! 1. **Execution counters:** Instruction fetches, data words read and written.
//! 2. **Branch counters:** Branches executed and taken, with the taken ratio.
//! 3. **Cache counters:** Reads, writes, hits, misses, and write-backs of the cache model.
//!
//! All counters are monotonically non-decreasing for the lifetime of a run. The
//! `Display` implementations render the end-of-run report blocks.

use std::fmt;

/// Execution statistics of the interpreter loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instruction words fetched.
    pub inst_fetches: u64,
    /// Number of data words read by loads.
    pub memory_reads: u64,
    /// Number of data words written by stores.
    pub memory_writes: u64,
    /// Number of branch instructions executed, taken or not.
    pub branches: u64,
    /// Number of branches that redirected the fetch pointer.
    pub taken: u64,
}

impl SimStats {
    /// Returns the percentage of executed branches that were taken.
    ///
    /// Returns `0.0` when no branch has executed.
    pub fn taken_percent(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * self.taken as f64 / self.branches as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "execution statistics (in decimal):")?;
        writeln!(f, "  instruction fetches = {}", self.inst_fetches)?;
        writeln!(f, "  data words read     = {}", self.memory_reads)?;
        writeln!(f, "  data words written  = {}", self.memory_writes)?;
        writeln!(f, "  branches executed   = {}", self.branches)?;
        if self.taken == 0 {
            writeln!(f, "  branches taken      = 0")
        } else {
            writeln!(
                f,
                "  branches taken      = {} ({:.1}%)",
                self.taken,
                self.taken_percent()
            )
        }
    }
}

/// Counters maintained by the cache model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Read accesses classified.
    pub reads: u64,
    /// Write accesses classified.
    pub writes: u64,
    /// Accesses that found a valid line with a matching tag.
    pub hits: u64,
    /// Accesses that installed a new line.
    pub misses: u64,
    /// Evictions of lines that were valid and dirty.
    pub write_backs: u64,
}

impl CacheStats {
    /// Total number of classified accesses.
    pub const fn accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Returns the hit rate as a fraction in `[0, 1]`, or `0.0` with no accesses.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cache statistics (in decimal):")?;
        writeln!(f, "  cache reads       = {}", self.reads)?;
        writeln!(f, "  cache writes      = {}", self.writes)?;
        writeln!(f, "  cache hits        = {}", self.hits)?;
        writeln!(f, "  cache misses      = {}", self.misses)?;
        writeln!(f, "  cache write backs = {}", self.write_backs)
    }
}
