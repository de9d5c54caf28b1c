//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Word capacity and byte-to-word conversion.
//! 2. **Register Constants:** Register file size and the hardwired zero register.
//! 3. **Cache Geometry:** Set/way counts and the address slicing used by the cache model.
//! 4. **Loader Constants:** Default limit on the size of a loaded memory image.

/// Capacity of main memory in 32-bit words (256K words, 1 MiB).
pub const MEM_SIZE_IN_WORDS: usize = 256 * 1024;

/// Number of bits to shift a byte address right to obtain its word index.
pub const WORD_SHIFT: u32 = 2;

/// Size of an instruction in bytes; the fetch pointer advances by this much.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Index of the register that is forced to zero after every instruction.
pub const REG_ZERO: usize = 0;

/// Number of sets in the simulated cache.
pub const CACHE_SETS: usize = 8;

/// Number of ways per cache set.
pub const CACHE_WAYS: usize = 4;

/// Number of block-offset bits in an address (16-byte lines).
pub const LINE_OFFSET_BITS: u32 = 4;

/// Mask applied after shifting out the block offset to obtain the set index.
pub const SET_INDEX_MASK: u32 = 0x7;

/// Number of low address bits below the tag (offset + index).
pub const TAG_SHIFT: u32 = 7;

/// Default maximum number of words the loader accepts for one memory image.
pub const DEFAULT_LOAD_LIMIT: usize = 256;

/// Exit status used when an unrecognized opcode terminates the run.
pub const EXIT_UNKNOWN_OPCODE: i32 = 255;

/// Exit status used when a fatal invariant violation aborts the run.
pub const EXIT_FATAL: i32 = 134;
