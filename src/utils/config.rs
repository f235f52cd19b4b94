use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Connection details for the upstream Flickr REST endpoint.
#[derive(Clone, Debug)]
pub struct FlickrSettings {
    pub base_url: String,
    pub endpoint_path: String,
    pub search_method: String,
    pub recent_method: String,
    pub format: String,
    pub api_key: String,
    pub api_secret: String,
}

impl FlickrSettings {
    /// Full endpoint URL without query parameters.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub upstream_timeout: Option<Duration>,
    /// Directory for the rolling JSON log file; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub flickr: FlickrSettings,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let port = var("GALLERY_PORT").and_then(|v| v.parse().ok()).unwrap_or(5000);
        let static_dir = var("GALLERY_STATIC_DIR").unwrap_or_else(|| "static".to_string());
        let upstream_timeout = var("GALLERY_UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let log_dir = match var("GALLERY_LOG_DIR") {
            Some(v) if v.eq_ignore_ascii_case("off") || v.eq_ignore_ascii_case("none") => None,
            Some(v) => Some(PathBuf::from(v)),
            None => Some(PathBuf::from("logs")),
        };
        let flickr = FlickrSettings {
            base_url: var("FLICKR_BASE_URL").unwrap_or_else(|| "https://api.flickr.com".to_string()),
            endpoint_path: var("FLICKR_ENDPOINT_PATH").unwrap_or_else(|| "/services/rest".to_string()),
            search_method: var("FLICKR_SEARCH_METHOD").unwrap_or_else(|| "flickr.photos.search".to_string()),
            recent_method: var("FLICKR_RECENT_METHOD").unwrap_or_else(|| "flickr.photos.getRecent".to_string()),
            format: var("FLICKR_FORMAT").unwrap_or_else(|| "json".to_string()),
            api_key: var("FLICKR_API_KEY").unwrap_or_default(),
            api_secret: var("FLICKR_API_SECRET").unwrap_or_default(),
        };
        Self {
            port,
            static_dir: PathBuf::from(static_dir),
            upstream_timeout,
            log_dir,
            flickr,
        }
    }
}
