use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use axum::http::Method;
use crate::AppState;
use crate::api::handlers;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::OPTIONS])
        .allow_headers(vec![axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);

    // Anything that is not an API route is served from the gallery's static files.
    let static_files = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/photos/search", get(handlers::search_photos))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
