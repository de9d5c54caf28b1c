//! Main Memory.
//!
//! This module implements the flat word array that holds the program image
//! and all data. It provides:
//! 1. **Addressing:** Byte addresses are turned into word indices by an arithmetic shift right by two.
//! 2. **Bounds checking:** Every access outside `[0, capacity)` fails with [`SimError::AddressOutOfBounds`].
//! 3. **Loading:** The initial image is copied in starting at word index 0.

use crate::common::constants::WORD_SHIFT;
use crate::common::data::AccessType;
use crate::common::error::SimError;

/// Main memory: a fixed-capacity array of signed 32-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<i32>,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `size_words` - Capacity in 32-bit words.
    pub fn new(size_words: usize) -> Self {
        Self {
            words: vec![0; size_words],
        }
    }

    /// Returns the capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Returns the whole word array.
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Copies `image` into memory starting at word index 0.
    ///
    /// Words past the end of memory are dropped; the loader enforces its own
    /// limit before calling this.
    pub fn load(&mut self, image: &[u32]) {
        for (slot, &word) in self.words.iter_mut().zip(image) {
            *slot = word as i32;
        }
    }

    /// Maps a byte address to an in-range word index.
    fn index(&self, addr: i32, access: AccessType) -> Result<usize, SimError> {
        let word_index = addr >> WORD_SHIFT;
        match usize::try_from(word_index) {
            Ok(idx) if idx < self.words.len() => Ok(idx),
            _ => Err(SimError::AddressOutOfBounds {
                access,
                addr,
                word_index,
                capacity: self.words.len(),
            }),
        }
    }

    /// Reads the word containing byte address `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; the low two bits are ignored.
    /// * `access` - Reported in the error when the address is out of range.
    pub fn read(&self, addr: i32, access: AccessType) -> Result<i32, SimError> {
        let idx = self.index(addr, access)?;
        Ok(self.words[idx])
    }

    /// Writes `val` to the word containing byte address `addr`.
    pub fn write(&mut self, addr: i32, val: i32) -> Result<(), SimError> {
        let idx = self.index(addr, AccessType::Write)?;
        self.words[idx] = val;
        Ok(())
    }
}
