//! Error types for the photo search path and their HTTP rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::flickr::is_recent_query;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures raised by an [`HttpTransport`](crate::flickr::HttpTransport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Upstream responded with HTTP {0}")]
    Status(u16),

    #[error("Upstream request timed out")]
    Timeout,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed upstream response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Upstream API error {code}: {message}")]
    Api { code: i64, message: String },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{}", no_results_message(.term))]
    NoResults { term: String },

    #[error("Failed to fetch photos: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Photo search was cancelled after exceeding its deadline")]
    Cancelled,
}

fn no_results_message(term: &str) -> String {
    if is_recent_query(term) {
        "No recent photos were found".to_string()
    } else {
        format!("No photos were found for '{}'", term)
    }
}

impl From<TransportError> for SearchError {
    fn from(err: TransportError) -> Self {
        SearchError::Upstream(UpstreamError::Transport(err))
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Upstream(UpstreamError::Parse(err))
    }
}

impl SearchError {
    /// Stable machine-readable code sent to the browser.
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::Configuration(_) => "configuration_error",
            SearchError::NoResults { .. } => "no_results",
            SearchError::Upstream(_) => "upstream_error",
            SearchError::Cancelled => "upstream_timeout",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::NoResults { .. } => StatusCode::NOT_FOUND,
            SearchError::Upstream(_) => StatusCode::BAD_GATEWAY,
            SearchError::Cancelled => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match &self {
            SearchError::NoResults { term } => tracing::info!(search_term = %term, "no photos found"),
            SearchError::Cancelled => tracing::warn!("{}", self),
            SearchError::Configuration(_) | SearchError::Upstream(_) => tracing::error!("{}", self),
        }
        let body = Json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
