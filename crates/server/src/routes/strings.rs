use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use query::{RawFilterParams, StringFilters};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use store::AnalyzedString;

/// Response for a structured filter scan
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub count: usize,
    pub data: Vec<AnalyzedString>,
    /// Echo of the filters that were actually applied; absent filters are
    /// omitted entirely.
    pub filters_applied: StringFilters,
}

/// Analyze a string and store the resulting record.
///
/// The body must be `{"value": <string>}`. The record id is the SHA-256 hash
/// of the value, so resubmitting identical content is rejected with a
/// conflict and leaves the original record untouched.
pub async fn analyze_string(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(body) = body.map_err(|_| ServerError::MalformedBody)?;

    let value = match body.get("value") {
        None => return Err(ServerError::MalformedBody),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ServerError::InvalidValueType),
    };

    let record = AnalyzedString::analyze(value)?;
    state.store.insert(record.clone())?;

    tracing::debug!(id = %record.id, length = record.properties.length, "Stored string");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get a record by its original value; the content hash is re-derived
/// server-side.
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    if value.is_empty() {
        return Err(ServerError::MissingPathValue);
    }

    let record = state.store.get_by_value(&value)?;
    Ok(Json(record))
}

/// `/strings/` with nothing after the slash: the value segment is required.
pub async fn missing_path_value() -> ServerError {
    ServerError::MissingPathValue
}

/// Delete a record by its original value.
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    if value.is_empty() {
        return Err(ServerError::MissingPathValue);
    }

    state.store.delete_by_value(&value)?;

    tracing::debug!(value = %value, "Deleted string");

    Ok(StatusCode::NO_CONTENT)
}

/// List stored records, optionally filtered.
///
/// All filter parameters are optional and AND together; they are validated
/// before any record is scanned.
pub async fn filter_strings(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<RawFilterParams>,
) -> ServerResult<impl IntoResponse> {
    let filters = StringFilters::parse(&params)?;
    let data = state.engine.filter(&filters);

    Ok(Json(FilterResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}
