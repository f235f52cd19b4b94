use std::sync::Arc;
use axum::{extract::{State, Query}, http::{StatusCode, header}, Json, response::IntoResponse};
use serde::Deserialize;
use tracing::info;
use crate::AppState;
use crate::error::SearchError;
use crate::models::photo::{Filter, SearchRequest};

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.started_at.elapsed().as_secs(),
    });
    (StatusCode::OK, Json(body))
}

#[derive(Deserialize)]
pub struct PhotoSearchQuery {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    page: Option<u32>,
    sort: Option<String>,
}

pub async fn search_photos(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PhotoSearchQuery>,
) -> Result<impl IntoResponse, SearchError> {
    let request = SearchRequest::new(
        q.search_term.unwrap_or_default(),
        q.page.unwrap_or(1),
        Filter::from_token(q.sort.as_deref().unwrap_or_default()),
    );
    info!(search_term = %request.search_term, page = request.page, filter = ?request.filter, "photo search");

    let search = state.search.search(&request);
    let photos = match state.config.upstream_timeout {
        // Dropping the future on expiry aborts the in-flight upstream request.
        Some(deadline) => tokio::time::timeout(deadline, search)
            .await
            .map_err(|_| SearchError::Cancelled)??,
        None => search.await?,
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        Json(photos),
    ))
}
