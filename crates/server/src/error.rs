use analysis::AnalyzeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use query::{FilterError, QueryError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::StoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types.
///
/// Every variant maps to exactly one status code, and every error response
/// body is the flat `{"error": <message>}` shape.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid request body or missing \"value\" field")]
    MalformedBody,

    #[error("Invalid data type for \"value\" (must be string)")]
    InvalidValueType,

    #[error("Missing string value in path")]
    MissingPathValue,

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Not found")]
    RouteNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MalformedBody | ServerError::MissingPathValue => StatusCode::BAD_REQUEST,
            ServerError::InvalidValueType => StatusCode::UNPROCESSABLE_ENTITY,
            // Blank values are indistinguishable from a missing value field
            // at the API boundary
            ServerError::Analyze(AnalyzeError::BlankValue) => StatusCode::BAD_REQUEST,
            ServerError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ServerError::Store(StoreError::DuplicateContent { .. }) => StatusCode::CONFLICT,
            ServerError::Filter(_) => StatusCode::BAD_REQUEST,
            ServerError::Query(QueryError::Unparsable) => StatusCode::BAD_REQUEST,
            ServerError::Query(QueryError::ConflictingFilters) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Internal(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
