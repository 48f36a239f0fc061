use serde::{Deserialize, Serialize};
use store::AnalyzedString;
use thiserror::Error;

/// Raised when a raw filter parameter fails validation, before any record is
/// scanned. The display string is surfaced verbatim on the HTTP error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid query parameter values or types")]
pub struct FilterError {
    /// Name of the offending parameter.
    pub param: &'static str,
}

/// Raw, unvalidated filter parameters as they arrive on the query string.
///
/// Every field is optional; [`StringFilters::parse`] turns this into the
/// typed form or rejects it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// A typed set of optional predicates over stored records.
///
/// Absent fields impose no constraint; present fields AND together. The
/// struct serializes with absent fields skipped, which is exactly the
/// `filters_applied` / `parsed_filters` echo the HTTP layer returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    /// Validate raw parameters into typed filters.
    ///
    /// - `is_palindrome` must be exactly `true` or `false`
    /// - `min_length`, `max_length`, `word_count` must parse as unsigned
    ///   integers
    /// - `contains_character` must be exactly one character after
    ///   lowercasing; multi-codepoint input is rejected
    ///
    /// Any violation fails with [`FilterError`] naming the parameter; nothing
    /// is scanned on failure.
    pub fn parse(raw: &RawFilterParams) -> Result<Self, FilterError> {
        let mut filters = StringFilters::default();

        if let Some(value) = raw.is_palindrome.as_deref() {
            filters.is_palindrome = Some(match value {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(FilterError {
                        param: "is_palindrome",
                    })
                }
            });
        }

        if let Some(value) = raw.min_length.as_deref() {
            filters.min_length = Some(parse_count(value, "min_length")?);
        }
        if let Some(value) = raw.max_length.as_deref() {
            filters.max_length = Some(parse_count(value, "max_length")?);
        }
        if let Some(value) = raw.word_count.as_deref() {
            filters.word_count = Some(parse_count(value, "word_count")?);
        }

        if let Some(value) = raw.contains_character.as_deref() {
            filters.contains_character = Some(parse_single_char(value).ok_or(FilterError {
                param: "contains_character",
            })?);
        }

        Ok(filters)
    }

    /// Whether no predicate is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Conjunctive evaluation of all present predicates against a record.
    ///
    /// `contains_character` matches case-insensitively against the original,
    /// non-stripped value; everything else reads the precomputed properties.
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        let props = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(words) = self.word_count {
            if props.word_count != words {
                return false;
            }
        }
        if let Some(needle) = self.contains_character {
            if !record.value.to_lowercase().contains(needle) {
                return false;
            }
        }

        true
    }
}

fn parse_count(value: &str, param: &'static str) -> Result<usize, FilterError> {
    value.parse::<usize>().map_err(|_| FilterError { param })
}

/// Lowercase `value` and accept it only if it is exactly one Unicode scalar
/// value. Lowercasing runs first, so a single uppercase character whose
/// lowercase form expands to multiple characters is rejected.
pub(crate) fn parse_single_char(value: &str) -> Option<char> {
    let folded = value.to_lowercase();
    let mut chars = folded.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
