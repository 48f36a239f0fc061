//! Natural-language query translation.
//!
//! A small closed set of phrasings is recognized; everything else is
//! rejected. Translation is driven by [`RULES`], an ordered table of
//! (trigger, translate) pairs evaluated top-down against the lowercased
//! query, first matching trigger wins. Extending the language means adding a
//! row, not another branch.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::filters::{parse_single_char, StringFilters};

/// Errors produced by query translation. Display strings are surfaced
/// verbatim on the HTTP error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No rule triggered, or a triggered rule could not extract its value.
    #[error("unable to parse natural language query")]
    Unparsable,

    /// Translation produced mutually exclusive predicates.
    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingFilters,
}

struct Rule {
    trigger: fn(&str) -> bool,
    translate: fn(&str) -> Result<StringFilters, QueryError>,
}

/// Ordered rule table. Order is part of the contract: "single word
/// palindromic" outranks "longer than", which outranks the vowel heuristic,
/// which outranks "containing the letter".
static RULES: &[Rule] = &[
    Rule {
        trigger: |q| q.contains("single word") && q.contains("palindromic"),
        translate: translate_single_word_palindromic,
    },
    Rule {
        trigger: |q| q.contains("longer than"),
        translate: translate_longer_than,
    },
    Rule {
        trigger: |q| q.contains("palindromic") && q.contains("first vowel"),
        translate: translate_palindromic_first_vowel,
    },
    Rule {
        trigger: |q| q.contains("containing the letter"),
        translate: translate_containing_letter,
    },
];

static LONGER_THAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*strings\s+longer\s+than\s+(\d+)").expect("pattern compiles")
});

static CONTAINING_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*strings\s+containing\s+the\s+letter\s+(\S+)").expect("pattern compiles")
});

fn translate_single_word_palindromic(_query: &str) -> Result<StringFilters, QueryError> {
    Ok(StringFilters {
        word_count: Some(1),
        is_palindrome: Some(true),
        ..StringFilters::default()
    })
}

/// "strings longer than N" means strictly longer, so the minimum length is
/// N + 1. The extraction is anchored: the query must lead with the phrase.
fn translate_longer_than(query: &str) -> Result<StringFilters, QueryError> {
    let captures = LONGER_THAN.captures(query).ok_or(QueryError::Unparsable)?;
    let n: usize = captures[1].parse().map_err(|_| QueryError::Unparsable)?;
    Ok(StringFilters {
        min_length: Some(n.saturating_add(1)),
        ..StringFilters::default()
    })
}

/// Fixed heuristic: "first vowel" stands for the letter `a`.
fn translate_palindromic_first_vowel(_query: &str) -> Result<StringFilters, QueryError> {
    Ok(StringFilters {
        is_palindrome: Some(true),
        contains_character: Some('a'),
        ..StringFilters::default()
    })
}

/// Extract the token after "strings containing the letter", strip
/// surrounding quotes and sentence punctuation, and require exactly one
/// character to survive.
fn translate_containing_letter(query: &str) -> Result<StringFilters, QueryError> {
    let captures = CONTAINING_LETTER
        .captures(query)
        .ok_or(QueryError::Unparsable)?;
    let token = captures[1].trim_matches(|c| c == '"' || c == '.' || c == ',');
    let letter = parse_single_char(token).ok_or(QueryError::Unparsable)?;
    Ok(StringFilters {
        contains_character: Some(letter),
        ..StringFilters::default()
    })
}

/// Translate a natural-language query into structured filters.
///
/// The query is lowercased, matched against [`RULES`] in order, and the first
/// triggered rule produces the filters. A query that triggers no rule, or
/// whose triggered rule cannot extract its value, fails with
/// [`QueryError::Unparsable`]; a translation carrying both `word_count` and
/// `min_length` fails with [`QueryError::ConflictingFilters`] rather than
/// silently combining them.
pub fn translate(query: &str) -> Result<StringFilters, QueryError> {
    let lowered = query.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| (rule.trigger)(&lowered))
        .ok_or(QueryError::Unparsable)?;
    let filters = (rule.translate)(&lowered)?;
    ensure_consistent(&filters)?;
    Ok(filters)
}

/// `word_count` and `min_length` together are contradictory in this query
/// language; no current rule emits both, but overlapping future rules must
/// fail loudly instead of combining.
fn ensure_consistent(filters: &StringFilters) -> Result<(), QueryError> {
    if filters.word_count.is_some() && filters.min_length.is_some() {
        return Err(QueryError::ConflictingFilters);
    }
    Ok(())
}
