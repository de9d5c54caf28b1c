//! Memory Image Loader.
//!
//! This module reads the initial memory image. It performs:
//! 1. **Tokenizing:** Splits the input on whitespace; every token is one 32-bit word.
//! 2. **Parsing:** Accepts hexadecimal digits with an optional `0x`/`0X` prefix.
//! 3. **Limiting:** Rejects images holding more words than the configured limit.
//!
//! Words are returned in input order; the simulator places them at word index 0
//! upwards.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;

/// Parses one hex token.
fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

/// Reads a memory image from any buffered reader.
///
/// # Arguments
///
/// * `reader` - Source of whitespace-separated hex words.
/// * `limit` - Maximum number of words accepted.
///
/// # Returns
///
/// The words in input order, or the first error encountered.
pub fn parse_image<R: BufRead>(reader: R, limit: usize) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let word = parse_word(token).ok_or_else(|| LoadError::InvalidWord {
                line: idx + 1,
                token: token.to_string(),
            })?;
            if words.len() >= limit {
                return Err(LoadError::TooManyWords { limit });
            }
            words.push(word);
        }
    }

    debug!(words = words.len(), "memory image parsed");
    Ok(words)
}

/// Reads a memory image from a file.
pub fn load_file(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u32>, LoadError> {
    let file = File::open(path)?;
    parse_image(BufReader::new(file), limit)
}
