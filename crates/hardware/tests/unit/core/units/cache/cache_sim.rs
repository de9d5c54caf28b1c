//! Cache Simulator (CacheSim) Unit Tests.
//!
//! Verifies the 8-set, 4-way access classifier: address slicing, hit/miss
//! logic, victim selection, write-back counting, and the counters.
//!
//! The CacheSim is constructed directly from CacheConfig, no CPU needed.
//!
//! Set index = (addr >> 4) & 7
//! Tag       = addr >> 7
//! Addresses 0x000, 0x080, 0x100, ... all map to set 0 with tags 0, 1, 2, ...

use i860sim_core::common::AccessType;
use i860sim_core::config::{CacheConfig, ReplacementPolicy};
use i860sim_core::core::units::cache::{CacheLine, CacheSim};
use i860sim_core::stats::CacheStats;
use pretty_assertions::assert_eq;

fn plru_cache() -> CacheSim {
    CacheSim::new(&CacheConfig::default())
}

fn lru_cache() -> CacheSim {
    CacheSim::new(&CacheConfig {
        enabled: true,
        policy: ReplacementPolicy::Lru,
    })
}

/// Byte address of tag `tag` in set 0.
const fn set0(tag: u32) -> u32 {
    tag << 7
}

// ══════════════════════════════════════════════════════════
// 1. Hits and misses
// ══════════════════════════════════════════════════════════

#[test]
fn cold_miss_then_hit() {
    let mut cache = plru_cache();
    let first = cache.access(0x44, AccessType::Read);
    let second = cache.access(0x44, AccessType::Read);

    assert!(!first.hit);
    assert!(second.hit);
    assert_eq!(first.way, second.way);
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.stats().misses, 1);
}

/// Every byte of a 16-byte line hits once the line is resident.
#[test]
fn same_line_offsets_hit() {
    let mut cache = plru_cache();
    let _ = cache.access(0x40, AccessType::Read);
    for offset in [0x41, 0x44, 0x4c, 0x4f] {
        assert!(cache.access(offset, AccessType::Read).hit, "offset {offset:#x}");
    }
    assert!(!cache.access(0x50, AccessType::Read).hit);
}

#[test]
fn different_sets_do_not_conflict() {
    let mut cache = plru_cache();
    for set in 0..8u32 {
        let acc = cache.access(set << 4, AccessType::Read);
        assert_eq!(acc.set, set as usize);
        assert_eq!(acc.way, 0);
    }
    assert_eq!(cache.stats().misses, 8);
}

/// A negative effective address is classified as its unsigned bit pattern.
#[test]
fn negative_address_uses_unsigned_bits() {
    let mut cache = plru_cache();
    let acc = cache.access(-8i32 as u32, AccessType::Read);
    assert_eq!(acc.set, 7);
    assert_eq!(acc.tag, 0x01ff_ffff);
}

// ══════════════════════════════════════════════════════════
// 2. Fill order and PLRU eviction
// ══════════════════════════════════════════════════════════

/// Four distinct tags fill ways 0-3; the fifth evicts exactly one line,
/// chosen by the PLRU table (state 0 after the fills, victim way 0).
#[test]
fn fifth_tag_evicts_plru_victim() {
    let mut cache = plru_cache();
    for tag in 0..4 {
        let acc = cache.access(set0(tag), AccessType::Read);
        assert!(!acc.hit);
        assert_eq!(acc.way, tag as usize);
    }

    let acc = cache.access(set0(4), AccessType::Read);
    assert!(!acc.hit);
    assert_eq!(acc.way, 0);
    assert!(!acc.write_back);

    assert!(!cache.contains(set0(0)));
    for tag in 1..5 {
        assert!(cache.contains(set0(tag)), "tag {tag}");
    }
    assert_eq!(cache.stats().misses, 5);
}

/// After re-touching way 0 the PLRU tree points at way 2, while true LRU
/// evicts way 1.
#[test]
fn plru_and_lru_choose_differently() {
    let sequence = [set0(0), set0(1), set0(2), set0(3), set0(0), set0(4)];

    let mut plru = plru_cache();
    let mut lru = lru_cache();
    let mut last = (0, 0);
    for addr in sequence {
        last = (
            plru.access(addr, AccessType::Read).way,
            lru.access(addr, AccessType::Read).way,
        );
    }
    assert_eq!(last, (2, 1));
}

/// An invalid way is always filled before the policy is consulted.
#[test]
fn invalid_ways_fill_in_order() {
    let mut cache = plru_cache();
    let ways: Vec<usize> = (0..4)
        .map(|tag| cache.access(set0(tag), AccessType::Write).way)
        .collect();
    assert_eq!(ways, vec![0, 1, 2, 3]);
}

// ══════════════════════════════════════════════════════════
// 3. Dirty lines and write-backs
// ══════════════════════════════════════════════════════════

#[test]
fn write_marks_line_dirty_read_does_not() {
    let mut cache = plru_cache();
    let _ = cache.access(set0(0), AccessType::Read);
    let _ = cache.access(set0(1), AccessType::Write);

    assert_eq!(
        cache.line(0, 0),
        CacheLine {
            tag: 0,
            valid: true,
            dirty: false,
        }
    );
    assert_eq!(
        cache.line(0, 1),
        CacheLine {
            tag: 1,
            valid: true,
            dirty: true,
        }
    );
}

#[test]
fn write_hit_sets_dirty() {
    let mut cache = plru_cache();
    let _ = cache.access(0x44, AccessType::Read);
    let acc = cache.access(0x48, AccessType::Write);
    assert!(acc.hit);
    assert!(cache.line(acc.set, acc.way).dirty);
}

/// Evicting a dirty line counts one write-back; the new line starts clean.
#[test]
fn dirty_eviction_counts_write_back() {
    let mut cache = plru_cache();
    let _ = cache.access(set0(0), AccessType::Write);
    for tag in 1..4 {
        let _ = cache.access(set0(tag), AccessType::Read);
    }
    let acc = cache.access(set0(4), AccessType::Read);

    assert_eq!(acc.way, 0);
    assert!(acc.write_back);
    assert!(!cache.line(0, 0).dirty);
    assert_eq!(
        *cache.stats(),
        CacheStats {
            reads: 4,
            writes: 1,
            hits: 0,
            misses: 5,
            write_backs: 1,
        }
    );
}

#[test]
fn clean_eviction_has_no_write_back() {
    let mut cache = plru_cache();
    for tag in 0..8 {
        let _ = cache.access(set0(tag), AccessType::Read);
    }
    assert_eq!(cache.stats().write_backs, 0);
    assert_eq!(cache.stats().misses, 8);
}

#[test]
fn write_miss_installs_dirty_line() {
    let mut cache = plru_cache();
    let acc = cache.access(0x100, AccessType::Write);
    assert!(!acc.hit);
    assert!(cache.line(acc.set, acc.way).dirty);
    assert_eq!(cache.stats().writes, 1);
    assert_eq!(cache.stats().reads, 0);
}

// ══════════════════════════════════════════════════════════
// 4. Counters
// ══════════════════════════════════════════════════════════

#[test]
fn hits_plus_misses_equals_accesses() {
    let mut cache = plru_cache();
    let addrs = [0x0, 0x80, 0x0, 0x104, 0x200, 0x280, 0x300, 0x0, 0x44, 0x44];
    for (i, addr) in addrs.into_iter().enumerate() {
        let kind = if i % 3 == 0 {
            AccessType::Write
        } else {
            AccessType::Read
        };
        let _ = cache.access(addr, kind);
    }
    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses, stats.accesses());
    assert_eq!(stats.accesses(), addrs.len() as u64);
}
