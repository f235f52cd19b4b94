#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{serve, Router};
use flickr_gallery::api::routes;
use flickr_gallery::flickr::{PhotoSearch, ReqwestTransport, SearchService};
use flickr_gallery::utils::config::Config;
use flickr_gallery::AppState;
use parking_lot::Mutex;
use tokio::net::TcpListener;

/// Canned reply for the fake Flickr endpoint.
#[derive(Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl UpstreamReply {
    pub fn ok(body: serde_json::Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string(), delay: None }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self { status, body: body.to_string(), delay: None }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Fake upstream that records every query string it receives.
pub struct FakeUpstream {
    pub base_url: String,
    pub queries: Arc<Mutex<Vec<String>>>,
}

struct UpstreamState {
    reply: UpstreamReply,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn upstream_handler(State(state): State<Arc<UpstreamState>>, uri: Uri) -> impl IntoResponse {
    state.queries.lock().push(uri.query().unwrap_or_default().to_string());
    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }
    (state.reply.status, state.reply.body.clone())
}

pub async fn spawn_upstream(reply: UpstreamReply) -> FakeUpstream {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(UpstreamState { reply, queries: queries.clone() });
    let app = Router::new().fallback(upstream_handler).with_state(state);
    let port = serve_on_ephemeral_port(app).await;
    FakeUpstream { base_url: format!("http://127.0.0.1:{}", port), queries }
}

/// Photo in the shape the upstream API returns it.
pub fn upstream_photo(id: &str, title: &str, server: &str, secret: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id, "owner": "x", "secret": secret, "server": server, "farm": 1,
        "title": title, "ispublic": 1, "isfriend": 0, "isfamily": 0
    })
}

pub fn upstream_body(photos: Vec<serde_json::Value>) -> serde_json::Value {
    let total = photos.len();
    serde_json::json!({
        "photos": { "page": 1, "pages": 1, "perpage": 100, "total": total, "photo": photos },
        "stat": "ok"
    })
}

pub fn test_config(base_url: &str, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("FLICKR_BASE_URL".into(), base_url.into());
    vars.insert("FLICKR_API_KEY".into(), "test_key".into());
    vars.insert("FLICKR_API_SECRET".into(), "test_secret".into());
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }
    Config::from_vars(|key| vars.get(key).cloned())
}

/// Serves the real router, backed by the reqwest transport.
pub async fn spawn_app(config: Config) -> TestClient {
    let transport = Arc::new(ReqwestTransport::new().unwrap());
    let service = SearchService::new(config.flickr.clone(), transport).unwrap();
    spawn_app_with(config, Arc::new(service)).await
}

pub async fn spawn_app_with(config: Config, search: Arc<dyn PhotoSearch>) -> TestClient {
    let state = Arc::new(AppState::new(config, search));
    let port = serve_on_ephemeral_port(routes::router(state)).await;
    TestClient::new(port)
}

async fn serve_on_ephemeral_port(app: Router) -> u16 {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(&addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        serve(listener, app.into_make_service()).await.unwrap();
    });
    port
}

/// Helper to make HTTP requests to test server
pub struct TestClient {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestClient {
    pub fn new(port: u16) -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client.get(&format!("{}{}", self.base_url, path)).send().await
    }
}
