//! Content hashing for string identity.
//!
//! The SHA-256 digest of a string's raw bytes is both its storage key and its
//! deduplication token, so the digest must be bit-stable across versions and
//! platforms. The hex encoding is always lowercase.
//!
//! # Algorithm
//!
//! ```text
//! SHA-256(value_bytes) → lowercase hex string
//! ```
//!
//! # Examples
//!
//! ```rust
//! use analysis::hash_string;
//!
//! let hash = hash_string("hello");
//! assert_eq!(hash.len(), 64); // 256 bits as hex
//!
//! // Deterministic
//! assert_eq!(hash, hash_string("hello"));
//!
//! // The empty string has a fixed, well-known digest
//! assert_eq!(
//!     hash_string(""),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! ```

use sha2::{Digest, Sha256};

/// Hash a string's raw UTF-8 bytes with SHA-256 and return a lowercase hex
/// digest.
///
/// The input is hashed exactly as given: no trimming, no case folding, no
/// normalization. Two strings that differ only in whitespace or case hash to
/// different values.
///
/// # Returns
///
/// A 64-character hexadecimal string representing the SHA-256 digest.
pub fn hash_string(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
