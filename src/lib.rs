//! Workspace umbrella crate for textvault.
//!
//! This crate stitches together string analysis, content-addressed storage,
//! and the query layer so callers can operate over stored strings with a
//! single API entry point.

pub use analysis::{
    analyze, char_frequency, hash_string, is_palindrome, string_length, strip_whitespace,
    unique_char_count, word_count, AnalyzeError, TextProperties,
};
pub use query::{
    translate, FilterError, Interpretation, QueryEngine, QueryError, RawFilterParams,
    SearchMatches, StringFilters,
};
pub use store::{AnalyzedString, StoreError, TextStore};

use std::error::Error;
use std::fmt;

/// Errors that can occur while analyzing and storing a value in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    Analyze(AnalyzeError),
    Store(StoreError),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Analyze(err) => write!(f, "analysis failure: {err}"),
            VaultError::Store(err) => write!(f, "store failure: {err}"),
        }
    }
}

impl Error for VaultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VaultError::Analyze(err) => Some(err),
            VaultError::Store(err) => Some(err),
        }
    }
}

impl From<AnalyzeError> for VaultError {
    fn from(value: AnalyzeError) -> Self {
        VaultError::Analyze(value)
    }
}

impl From<StoreError> for VaultError {
    fn from(value: StoreError) -> Self {
        VaultError::Store(value)
    }
}

/// Analyze `value` and insert the resulting record into `store`, returning
/// the stored record.
///
/// Fails with [`VaultError::Analyze`] for blank values and
/// [`VaultError::Store`] when identical content is already present; a failed
/// call leaves the store unchanged.
pub fn store_value(store: &TextStore, value: &str) -> Result<AnalyzedString, VaultError> {
    let record = AnalyzedString::analyze(value)?;
    store.insert(record.clone())?;
    Ok(record)
}
