use std::sync::Arc;

use serde::Serialize;
use store::{AnalyzedString, TextStore};

use crate::filters::StringFilters;
use crate::translate::{translate, QueryError};


/// How a natural-language query was understood.
///
/// Serializes as `{"original": ..., "parsed_filters": {...}}`, the shape the
/// HTTP layer echoes back so callers can audit the interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// The query text exactly as received.
    pub original: String,
    /// The structured filters the query translated into.
    #[serde(rename = "parsed_filters")]
    pub filters: StringFilters,
}

/// Result of a natural-language search: the matching records plus the
/// interpretation that produced them.
#[derive(Debug, Clone)]
pub struct SearchMatches {
    pub records: Vec<AnalyzedString>,
    pub interpretation: Interpretation,
}

/// Evaluates structured filters and natural-language queries against a
/// shared store handle.
pub struct QueryEngine {
    store: Arc<TextStore>,
}

impl QueryEngine {
    /// Construct an engine over a shared store.
    pub fn new(store: Arc<TextStore>) -> Self {
        Self { store }
    }

    /// Scan a store snapshot and return the records matching every present
    /// predicate. Result order is unspecified, like the store's enumeration
    /// order.
    pub fn filter(&self, filters: &StringFilters) -> Vec<AnalyzedString> {
        self.store
            .all()
            .into_iter()
            .filter(|record| filters.matches(record))
            .collect()
    }

    /// Translate a natural-language query and run the resulting filters.
    pub fn search(&self, query: &str) -> Result<SearchMatches, QueryError> {
        let filters = translate(query)?;
        let records = self.filter(&filters);
        Ok(SearchMatches {
            records,
            interpretation: Interpretation {
                original: query.to_string(),
                filters,
            },
        })
    }
}
