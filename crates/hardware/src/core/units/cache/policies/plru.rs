//! Pseudo-LRU (PLRU) Replacement Policy.
//!
//! A four-way tree PLRU encoded as a 3-bit state per set. Bit 2 points at the
//! pair of ways to evict from (0: ways 0/1, 1: ways 2/3), bit 1 picks within
//! ways 0/1 and bit 0 within ways 2/3. Both the victim choice and the state
//! transition are literal lookup tables; the tables are the definition of the
//! policy and are not derived from the tree at run time.
//!
//! # Performance
//!
//! - **Time Complexity:** `update()` and `get_victim()` are single table lookups.
//! - **Space Complexity:** 3 bits per set.

use super::ReplacementPolicy;

/// Victim way for each 3-bit state.
pub const PLRU_VICTIM: [usize; 8] = [0, 0, 1, 1, 2, 3, 2, 3];

/// Next state, indexed by `(state << 2) | way`.
#[rustfmt::skip]
pub const PLRU_NEXT_STATE: [u8; 32] = [
    //  way: 0  1  2  3
    /* 0 */  6, 4, 1, 0,
    /* 1 */  7, 5, 1, 0,
    /* 2 */  6, 4, 3, 2,
    /* 3 */  7, 5, 3, 2,
    /* 4 */  6, 4, 1, 0,
    /* 5 */  7, 5, 1, 0,
    /* 6 */  6, 4, 3, 2,
    /* 7 */  7, 5, 3, 2,
];

/// Mask for the 3-bit state.
const STATE_MASK: usize = 0x7;

/// Mask for a 2-bit way number.
const WAY_MASK: usize = 0x3;

/// Returns the state that follows `state` after an access to `way`.
#[inline]
pub const fn next_state(state: u8, way: usize) -> u8 {
    PLRU_NEXT_STATE[((state as usize & STATE_MASK) << 2) | (way & WAY_MASK)]
}

/// Returns the way a full set in `state` evicts.
#[inline]
pub const fn victim(state: u8) -> usize {
    PLRU_VICTIM[state as usize & STATE_MASK]
}

/// PLRU Policy state.
#[derive(Clone, Debug)]
pub struct PlruPolicy {
    /// 3-bit tree state for each set.
    state: Vec<u8>,
}

impl PlruPolicy {
    /// Creates a new PLRU policy with every set in state 0.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    pub fn new(sets: usize) -> Self {
        Self {
            state: vec![0; sets],
        }
    }

    /// Returns the current 3-bit state of `set`.
    pub fn state(&self, set: usize) -> u8 {
        self.state[set]
    }
}

impl ReplacementPolicy for PlruPolicy {
    fn update(&mut self, set: usize, way: usize) {
        self.state[set] = next_state(self.state[set], way);
    }

    fn get_victim(&mut self, set: usize) -> usize {
        victim(self.state[set])
    }
}
