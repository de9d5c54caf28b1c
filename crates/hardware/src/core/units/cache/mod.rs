//! Set-Associative Cache Model.
//!
//! This module implements the 8-set, 4-way cache bookkeeping layer that sits
//! between the load/store handlers and main memory. It holds no data: each
//! access is only classified as a hit or a miss, the replacement state is
//! advanced, and dirty lines that get evicted are counted as write-backs.
//!
//! # Address Decomposition
//!
//! - **Offset:** bits 3-0 (16-byte line).
//! - **Set:** bits 6-4.
//! - **Tag:** bits 31-7.

/// Cache replacement policy implementations (PLRU, LRU).
pub mod policies;

use tracing::trace;

use self::policies::ReplacementPolicy;
use crate::common::constants::{
    CACHE_SETS, CACHE_WAYS, LINE_OFFSET_BITS, SET_INDEX_MASK, TAG_SHIFT,
};
use crate::common::data::AccessType;
use crate::config::CacheConfig;
use crate::stats::CacheStats;

/// State of one cache line: tag plus validity and dirty bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Tag bits of the cached address.
    pub tag: u32,
    /// Line holds a block.
    pub valid: bool,
    /// Line has been written since it was installed.
    pub dirty: bool,
}

/// Result of classifying a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheAccess {
    /// A valid line with a matching tag was found.
    pub hit: bool,
    /// Set index of the address.
    pub set: usize,
    /// Way that was hit or filled.
    pub way: usize,
    /// Tag of the address.
    pub tag: u32,
    /// The filled way held a valid, dirty line that was evicted.
    pub write_back: bool,
}

/// Cache simulator for the fixed 8-set, 4-way geometry.
#[derive(Debug)]
pub struct CacheSim {
    lines: [[CacheLine; CACHE_WAYS]; CACHE_SETS],
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl CacheSim {
    /// Creates a cold cache using the policy named in the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache configuration; only `policy` is consulted here.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_policy(policies::build(config.policy, CACHE_SETS, CACHE_WAYS))
    }

    /// Creates a cold cache driven by an explicit replacement policy.
    pub fn with_policy(policy: Box<dyn ReplacementPolicy>) -> Self {
        Self {
            lines: [[CacheLine::default(); CACHE_WAYS]; CACHE_SETS],
            policy,
            stats: CacheStats::default(),
        }
    }

    /// Returns the set index for a byte address.
    #[inline]
    pub const fn set_index(addr: u32) -> usize {
        ((addr >> LINE_OFFSET_BITS) & SET_INDEX_MASK) as usize
    }

    /// Returns the tag for a byte address.
    #[inline]
    pub const fn tag(addr: u32) -> u32 {
        addr >> TAG_SHIFT
    }

    /// Checks whether the block holding `addr` is resident, without touching
    /// counters or replacement state.
    pub fn contains(&self, addr: u32) -> bool {
        self.probe(Self::set_index(addr), Self::tag(addr)).is_some()
    }

    /// Returns the state of one line.
    ///
    /// # Arguments
    ///
    /// * `set` - Set index, `0..8`.
    /// * `way` - Way index, `0..4`.
    pub const fn line(&self, set: usize, way: usize) -> CacheLine {
        self.lines[set % CACHE_SETS][way % CACHE_WAYS]
    }

    /// Returns the counters accumulated so far.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn probe(&self, set: usize, tag: u32) -> Option<usize> {
        self.lines[set]
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }

    /// First invalid way in order, otherwise the policy's choice.
    fn select_victim(&mut self, set: usize) -> usize {
        self.lines[set]
            .iter()
            .position(|line| !line.valid)
            .unwrap_or_else(|| self.policy.get_victim(set))
    }

    /// Classifies one access and updates the cache state.
    ///
    /// Fetches are counted as reads; the interpreter does not route
    /// instruction fetches through the cache.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective byte address, reinterpreted as unsigned.
    /// * `access` - Kind of access.
    ///
    /// # Returns
    ///
    /// A [`CacheAccess`] describing the outcome.
    pub fn access(&mut self, addr: u32, access: AccessType) -> CacheAccess {
        let is_write = access.is_write();
        if is_write {
            self.stats.writes += 1;
        } else {
            self.stats.reads += 1;
        }

        let set = Self::set_index(addr);
        let tag = Self::tag(addr);
        let mut write_back = false;

        let (hit, way) = if let Some(way) = self.probe(set, tag) {
            self.stats.hits += 1;
            (true, way)
        } else {
            self.stats.misses += 1;
            let way = self.select_victim(set);
            let victim = &mut self.lines[set][way];
            if victim.valid && victim.dirty {
                self.stats.write_backs += 1;
                write_back = true;
            }
            *victim = CacheLine {
                tag,
                valid: true,
                dirty: false,
            };
            (false, way)
        };

        self.policy.update(set, way);

        if is_write {
            self.lines[set][way].dirty = true;
        }

        trace!(
            addr = format_args!("{addr:#x}"),
            set,
            way,
            tag = format_args!("{tag:#x}"),
            hit,
            write_back,
            "cache {access}"
        );

        CacheAccess {
            hit,
            set,
            way,
            tag,
            write_back,
        }
    }
}
