//! Textvault analysis layer.
//!
//! This crate derives a fixed set of properties from an input string: byte
//! length, a literal palindrome check, unique-character count, word count, a
//! character-frequency histogram, and a SHA-256 content hash. The hash doubles
//! as the string's identity everywhere else in the system, so determinism here
//! is what makes content-addressed storage work at all.
//!
//! ## What we compute
//!
//! - `length`: raw byte count, not grapheme clusters
//! - `is_palindrome`: byte-for-byte symmetry, no trimming or case folding
//! - `unique_characters` / `character_frequency_map`: computed over the
//!   whitespace-stripped, lowercased text
//! - `word_count`: maximal non-whitespace runs
//! - `sha256_hash`: lowercase hex digest of the raw bytes
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same input, same output,
//! on any machine, from any number of threads at once.
//!
//! ## Invariants worth knowing
//!
//! - The palindrome check is deliberately literal: "A man, a plan, a canal,
//!   Panama!" is NOT a palindrome here.
//! - Frequency and uniqueness are invariant under case changes and
//!   whitespace-only edits; length, palindrome, and hash are not.
//! - [`analyze`] rejects values that are blank after whitespace stripping;
//!   the individual property functions accept anything, including `""`.

mod error;
mod hash;
mod properties;
mod whitespace;

pub use crate::error::AnalyzeError;
pub use crate::hash::hash_string;
pub use crate::properties::{
    analyze, char_frequency, is_palindrome, string_length, unique_char_count, word_count,
    TextProperties,
};
pub use crate::whitespace::strip_whitespace;
