pub mod utils;
pub mod models;
pub mod error;
pub mod flickr;
pub mod api;

use std::sync::Arc;
use std::time::Instant;

use crate::flickr::PhotoSearch;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub config: Arc<Config>,
    pub search: Arc<dyn PhotoSearch>,
}

impl AppState {
    pub fn new(config: Config, search: Arc<dyn PhotoSearch>) -> Self {
        Self {
            started_at: Instant::now(),
            config: Arc::new(config),
            search,
        }
    }
}
