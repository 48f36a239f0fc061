use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use query::{Interpretation, QueryError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::AnalyzedString;

/// Query parameters for natural-language search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Natural-language search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    /// How the query was understood: the original text plus the structured
    /// filters it translated into.
    pub interpreted_query: Interpretation,
}

/// Filter stored records via a natural-language query.
///
/// A missing or empty `query` parameter is treated the same as an
/// unrecognized phrasing.
pub async fn search_strings(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> ServerResult<impl IntoResponse> {
    let query_text = params.query.unwrap_or_default();
    if query_text.is_empty() {
        return Err(ServerError::Query(QueryError::Unparsable));
    }

    let matches = state.engine.search(&query_text)?;

    tracing::debug!(
        query = %matches.interpretation.original,
        hits = matches.records.len(),
        "Natural-language search"
    );

    Ok(Json(SearchResponse {
        count: matches.records.len(),
        data: matches.records,
        interpreted_query: matches.interpretation,
    }))
}
