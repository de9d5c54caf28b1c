//! # CPU Memory Path Tests
//!
//! Loads and stores: effective-address computation for each addressing form,
//! the store addressing variants, bounds checking, and the order in which the
//! cache model and memory see an access.

use crate::common::{InstructionBuilder as B, TestContext};
use i860sim_core::common::{AccessType, SimError};
use i860sim_core::config::{Config, StoreAddressing};
use i860sim_core::core::cpu::MemAccess;
use i860sim_core::core::units::cache::CacheAccess;
use i860sim_core::stats::CacheStats;
use pretty_assertions::assert_eq;

#[test]
fn test_store_then_load_round_trip() {
    let mut ctx = TestContext::new().load_program(&[
        B::st(3, 4, 2),
        B::ld_imm(4, 2, 4),
        B::halt(),
    ]);
    ctx.set_reg(2, 0x40);
    ctx.set_reg(3, 0x1234);
    let summary = ctx.run();

    assert_eq!(ctx.mem_word(0x44), 0x1234);
    assert_eq!(ctx.get_reg(4), 0x1234);
    assert_eq!(summary.stats.memory_reads, 1);
    assert_eq!(summary.stats.memory_writes, 1);
    assert_eq!(
        summary.cache,
        Some(CacheStats {
            reads: 1,
            writes: 1,
            hits: 1,
            misses: 1,
            write_backs: 0,
        })
    );
}

#[test]
fn test_step_reports_data_access() {
    let mut ctx = TestContext::new().load_program(&[B::st(3, 4, 2), B::halt()]);
    ctx.set_reg(2, 0x40);
    let outcome = ctx.step();
    assert_eq!(
        outcome.access,
        Some(MemAccess {
            kind: AccessType::Write,
            addr: 0x44,
            cache: Some(CacheAccess {
                hit: false,
                set: 4,
                way: 0,
                tag: 0,
                write_back: false,
            }),
        })
    );

    // The next instruction makes no access.
    assert_eq!(ctx.step().access, None);
}

/// The store opcode has bit 28 set, so an odd displacement loses bit 0.
#[test]
fn test_store_odd_displacement_is_aligned() {
    let mut ctx = TestContext::new().load_program(&[B::st(3, 5, 2), B::halt()]);
    ctx.set_reg(2, 0x40);
    ctx.set_reg(3, 7);
    ctx.run_to_halt();
    assert_eq!(ctx.mem_word(0x44), 7);
}

#[test]
fn test_load_immediate_clears_offset_bit0() {
    let mut ctx = TestContext::new().load_program(&[B::ld_imm(0x45, 0, 4), B::halt()]);
    ctx.cpu_mut().mem.write(0x44, 99).unwrap();
    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(4), 99);
}

#[test]
fn test_load_immediate_negative_offset() {
    let mut ctx = TestContext::new().load_program(&[B::ld_imm(-8, 2, 4), B::halt()]);
    ctx.cpu_mut().mem.write(0x38, -5).unwrap();
    ctx.set_reg(2, 0x40);
    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(4), -5);
}

#[test]
fn test_indexed_load_sign_extends_sum() {
    let mut ctx = TestContext::new().load_program(&[B::ld(1, 2, 3), B::halt()]);
    ctx.cpu_mut().mem.write(0x44, 11).unwrap();
    ctx.set_reg(1, 0x1_0040);
    ctx.set_reg(2, 4);
    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(3), 11);
}

#[test]
fn test_store_addressing_variants() {
    let program = [B::st(3, 4, 2), B::halt()];

    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(2, 0x1F0);
    ctx.set_reg(3, 1);
    ctx.run_to_halt();
    assert_eq!(ctx.mem_word(0x1F4), 1);

    let mut config = Config::default();
    config.execution.store_addressing = StoreAddressing::ByteMasked;
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    ctx.set_reg(2, 0x1F0);
    ctx.set_reg(3, 1);
    ctx.run_to_halt();
    assert_eq!(ctx.mem_word(0xF4), 1);
    assert_eq!(ctx.mem_word(0x1F4), 0);
}

/// The cache classifies the access before memory rejects it.
#[test]
fn test_out_of_bounds_load_is_classified_first() {
    let mut ctx = TestContext::new().load_program(&[B::ld(0, 2, 3), B::halt()]);
    ctx.set_reg(2, -8);
    let err = ctx.run_err();

    assert_eq!(
        err,
        SimError::AddressOutOfBounds {
            access: AccessType::Read,
            addr: -8,
            word_index: -2,
            capacity: 256 * 1024,
        }
    );
    assert_eq!(ctx.cpu().stats.memory_reads, 0);
    let cache = ctx.cache_stats();
    assert_eq!(cache.reads, 1);
    assert_eq!(cache.misses, 1);

    // The failed access is still recorded with its classification.
    assert_eq!(
        ctx.cpu().last_access,
        Some(MemAccess {
            kind: AccessType::Read,
            addr: -8,
            cache: Some(CacheAccess {
                hit: false,
                set: 7,
                way: 0,
                tag: 0x01ff_ffff,
                write_back: false,
            }),
        })
    );
}

#[test]
fn test_out_of_bounds_store_is_fatal() {
    let mut ctx = TestContext::new().load_program(&[B::st(3, 0, 2), B::halt()]);
    ctx.set_reg(2, -4);
    let err = ctx.run_err();
    assert!(matches!(
        err,
        SimError::AddressOutOfBounds {
            access: AccessType::Write,
            addr: -4,
            ..
        }
    ));
    assert_eq!(ctx.cpu().stats.memory_writes, 0);
    assert_eq!(ctx.cache_stats().writes, 1);
}

#[test]
fn test_cacheless_run_has_no_cache_stats() {
    let mut config = Config::default();
    config.cache.enabled = false;
    let mut ctx = TestContext::with_config(&config).load_program(&[
        B::st(3, 4, 2),
        B::ld_imm(4, 2, 4),
        B::halt(),
    ]);
    ctx.set_reg(2, 0x40);
    ctx.set_reg(3, 5);

    let outcome = ctx.step();
    assert_eq!(outcome.access.and_then(|a| a.cache), None);

    let summary = ctx.run();
    assert_eq!(summary.cache, None);
    assert_eq!(summary.stats.memory_reads, 1);
    assert_eq!(ctx.get_reg(4), 5);
    assert!(!summary.to_string().contains("cache statistics"));
}
