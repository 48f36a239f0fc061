//! Property derivation over input strings.
//!
//! Each function here is independent and pure; [`analyze`] bundles them into
//! the [`TextProperties`] struct that gets stored alongside the value.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::hash::hash_string;
use crate::whitespace::strip_whitespace;

/// The full set of derived properties for a stored string.
///
/// Field names are part of the HTTP wire contract; they serialize exactly as
/// written here. Properties are computed once at insertion and never
/// recomputed, so every field is a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProperties {
    /// Byte length of the original value.
    pub length: usize,
    /// Literal byte-wise palindrome flag.
    pub is_palindrome: bool,
    /// Distinct characters after whitespace stripping and lowercasing.
    pub unique_characters: usize,
    /// Maximal non-whitespace runs in the original value.
    pub word_count: usize,
    /// Lowercase hex SHA-256 digest of the original value; equals the
    /// record id.
    pub sha256_hash: String,
    /// Lowercased, whitespace-stripped character → occurrence count.
    /// Serialized with single-character string keys in sorted order.
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// Byte length of `value`.
///
/// This is `str::len`, counting UTF-8 bytes rather than characters or
/// grapheme clusters: `string_length("é")` is 2.
pub fn string_length(value: &str) -> usize {
    value.len()
}

/// Whether `value` reads identically forward and backward, byte for byte.
///
/// Deliberately literal: no trimming, no case folding, no punctuation
/// stripping. `"racecar"` is a palindrome; `"A man, a plan, a canal,
/// Panama!"` is not. Multi-byte characters compare by their encoded bytes,
/// which is equivalent to reversing the byte sequence.
pub fn is_palindrome(value: &str) -> bool {
    let bytes = value.as_bytes();
    let n = bytes.len();
    for i in 0..n / 2 {
        if bytes[i] != bytes[n - 1 - i] {
            return false;
        }
    }
    true
}

/// Count of distinct characters in `value` after whitespace stripping and
/// lowercasing.
///
/// `"abcABC"` has 3 unique characters; `"Never Odd Or Even"` has 6
/// (`n`, `e`, `v`, `r`, `o`, `d`).
pub fn unique_char_count(value: &str) -> usize {
    let folded = strip_whitespace(value).to_lowercase();
    let mut seen = HashSet::new();
    for ch in folded.chars() {
        seen.insert(ch);
    }
    seen.len()
}

/// Count of words in `value`, where a word is a maximal run of
/// non-whitespace characters. Leading and trailing whitespace contribute
/// nothing.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Character-frequency histogram of `value` after whitespace stripping and
/// lowercasing.
///
/// Empty or whitespace-only input yields an empty map, never an error. The
/// map is ordered so its serialized form is deterministic.
pub fn char_frequency(value: &str) -> BTreeMap<char, u64> {
    let folded = strip_whitespace(value).to_lowercase();
    let mut frequency = BTreeMap::new();
    for ch in folded.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}

/// Derive all properties of `value` in one pass.
///
/// Rejects values that are empty after whitespace stripping with
/// [`AnalyzeError::BlankValue`]; everything else succeeds.
pub fn analyze(value: &str) -> Result<TextProperties, AnalyzeError> {
    if strip_whitespace(value).is_empty() {
        return Err(AnalyzeError::BlankValue);
    }

    Ok(TextProperties {
        length: string_length(value),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_char_count(value),
        word_count: word_count(value),
        sha256_hash: hash_string(value),
        character_frequency_map: char_frequency(value),
    })
}
