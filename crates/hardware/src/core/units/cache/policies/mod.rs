//! Cache Replacement Policies.
//!
//! Implements the algorithms that pick a victim way in a full set.
//!
//! # Policies
//!
//! - `Plru`: Tree pseudo-LRU driven by fixed 3-bit state tables.
//! - `Lru`: Least Recently Used.
//!
//! The cache only consults a policy when every way of the set is valid;
//! invalid ways are filled first in way order. The policy is updated on every
//! access, hit or miss, with the way that was finally used.

/// Least Recently Used replacement policy.
pub mod lru;

/// Pseudo-LRU (table-driven tree) replacement policy.
pub mod plru;

pub use lru::LruPolicy;
pub use plru::PlruPolicy;

use std::fmt::Debug;

use crate::config::ReplacementPolicy as PolicyType;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
pub trait ReplacementPolicy: Debug + Send + Sync {
    /// Updates the policy state when a line is accessed.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was accessed.
    fn update(&mut self, set: usize, way: usize);

    /// Selects a victim line to evict from a full set.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn get_victim(&mut self, set: usize) -> usize;
}

/// Builds the policy selected in the configuration.
pub fn build(kind: PolicyType, sets: usize, ways: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyType::Plru => Box::new(PlruPolicy::new(sets)),
        PolicyType::Lru => Box::new(LruPolicy::new(sets, ways)),
    }
}
