use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{Result, SearchError, UpstreamError};
use crate::flickr::query::QueryBuilder;
use crate::flickr::transport::HttpTransport;
use crate::models::photo::{Photo, SearchRequest, UpstreamEnvelope};
use crate::utils::config::FlickrSettings;

/// Photo lookup as seen by the HTTP layer.
#[async_trait]
pub trait PhotoSearch: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Photo>>;
}

/// Stateless search against the Flickr REST API. One upstream round trip per call.
pub struct SearchService {
    query: QueryBuilder,
    transport: Arc<dyn HttpTransport>,
}

impl SearchService {
    pub fn new(settings: FlickrSettings, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(SearchError::Configuration("Flickr API key not found".to_string()));
        }
        if settings.api_secret.trim().is_empty() {
            return Err(SearchError::Configuration("Flickr API secret not found".to_string()));
        }
        Ok(Self {
            query: QueryBuilder::new(settings),
            transport,
        })
    }
}

#[async_trait]
impl PhotoSearch for SearchService {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Photo>> {
        let url = self
            .query
            .build_search_url(&request.search_term, request.page, request.filter);
        let body = self.transport.fetch_text(&url).await?;
        parse_photos(&body, &request.search_term)
    }
}

/// Normalizes an upstream body into photos, in upstream order.
///
/// An explicit `stat: "fail"` is an upstream fault; a missing or empty
/// `photos.photo` array is reported as [`SearchError::NoResults`].
pub fn parse_photos(body: &str, search_term: &str) -> Result<Vec<Photo>> {
    let envelope: UpstreamEnvelope = serde_json::from_str(body)?;
    if envelope.stat.as_deref() == Some("fail") {
        return Err(UpstreamError::Api {
            code: envelope.code.unwrap_or_default(),
            message: envelope
                .message
                .unwrap_or_else(|| "unknown upstream failure".to_string()),
        }
        .into());
    }
    let photos = envelope
        .photos
        .and_then(|page| page.photo)
        .unwrap_or_default();
    if photos.is_empty() {
        return Err(SearchError::NoResults {
            term: search_term.to_string(),
        });
    }
    Ok(photos.into_iter().map(Photo::from).collect())
}
