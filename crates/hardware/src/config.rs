//! Configuration system for the simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory capacity, loader limit).
//! 2. **Structures:** Hierarchical config for general, memory, cache, and execution settings.
//! 3. **Enums:** Replacement policy and store addressing variants.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_file`]) or built with
//! `Config::default()`; the CLI then applies its flag overrides on top.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_LOAD_LIMIT, MEM_SIZE_IN_WORDS};
use crate::common::error::ConfigError;

/// Cache replacement policy algorithms.
///
/// The policy only chooses among ways of a full set; invalid ways are always
/// filled first, in way order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Tree pseudo-LRU driven by the fixed 3-bit state tables.
    #[default]
    #[serde(alias = "Plru")]
    Plru,
    /// True least-recently-used ordering per set.
    #[serde(alias = "Lru")]
    Lru,
}

/// Effective-address computation used by the immediate-offset store.
///
/// Two deployed variants of the store instruction exist. Both add the 4-bit
/// displacement to `reg[s2]`; they differ in how the sum is narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StoreAddressing {
    /// Sign-extend the low 16 bits of the sum.
    #[default]
    SignExtend16,
    /// Keep only the low 8 bits of the sum.
    ByteMasked,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use i860sim_core::config::{Config, ReplacementPolicy, StoreAddressing};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "cache": { "enabled": true, "policy": "LRU" },
///     "execution": { "store_addressing": "ByteMasked", "max_instructions": 1000 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.cache.policy, ReplacementPolicy::Lru);
/// assert_eq!(config.execution.store_addressing, StoreAddressing::ByteMasked);
/// assert_eq!(config.memory.size_words, 256 * 1024);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Main memory and loader settings
    pub memory: MemoryConfig,
    /// Cache model settings
    pub cache: CacheConfig,
    /// Instruction semantics variants and run limits
    pub execution: ExecutionConfig,
}

impl Config {
    /// Reads a configuration from a JSON file.
    ///
    /// Missing sections and fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction and memory access.
    pub trace_instructions: bool,

    /// Dump the register file and condition code after every instruction.
    pub dump_registers: bool,
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Memory capacity in 32-bit words
    pub size_words: usize,

    /// Maximum number of words the loader accepts
    pub load_limit: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: MEM_SIZE_IN_WORDS,
            load_limit: DEFAULT_LOAD_LIMIT,
        }
    }
}

/// Cache model configuration.
///
/// The geometry (8 sets, 4 ways, 16-byte lines) is fixed; only whether the
/// model runs and which policy picks victims can change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Classify loads and stores through the cache model
    pub enabled: bool,

    /// Replacement policy for full sets
    pub policy: ReplacementPolicy,
}

impl Default for CacheConfig {
    /// Cache modeling is on with the table-driven PLRU policy.
    fn default() -> Self {
        Self {
            enabled: true,
            policy: ReplacementPolicy::default(),
        }
    }
}

/// Instruction semantics variants and run limits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Effective-address variant for `st.l`
    pub store_addressing: StoreAddressing,

    /// Stop with an error after this many instructions (no limit when unset)
    pub max_instructions: Option<u64>,
}
