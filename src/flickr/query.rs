use crate::models::photo::Filter;
use crate::utils::config::FlickrSettings;

/// Sentinel the gallery sends when the search box is empty.
const NO_TERM_SENTINEL: &str = "NULL";

/// True when the term selects the get-recent operation instead of search.
pub fn is_recent_query(search_term: &str) -> bool {
    let trimmed = search_term.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_TERM_SENTINEL)
}

/// Builds upstream request URLs from read-only settings.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    settings: FlickrSettings,
}

impl QueryBuilder {
    pub fn new(settings: FlickrSettings) -> Self {
        Self { settings }
    }

    pub fn build_search_url(&self, search_term: &str, page: u32, filter: Filter) -> String {
        let s = &self.settings;
        let page = page.max(1).to_string();
        let params: Vec<(&str, &str)> = if is_recent_query(search_term) {
            vec![
                ("method", s.recent_method.as_str()),
                ("api_key", s.api_key.as_str()),
                ("format", s.format.as_str()),
                ("nojsoncallback", "1"),
                ("page", page.as_str()),
            ]
        } else {
            vec![
                ("method", s.search_method.as_str()),
                ("api_key", s.api_key.as_str()),
                ("text", search_term),
                ("sort", filter.sort_value()),
                ("format", s.format.as_str()),
                ("nojsoncallback", "1"),
                ("page", page.as_str()),
            ]
        };
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", s.endpoint(), query)
    }
}
