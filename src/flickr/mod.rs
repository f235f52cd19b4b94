//! Flickr REST client: URL construction, transport and response normalization.

pub mod query;
pub mod service;
pub mod transport;

pub use query::{is_recent_query, QueryBuilder};
pub use service::{PhotoSearch, SearchService};
pub use transport::{HttpTransport, ReqwestTransport};
