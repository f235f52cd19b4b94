use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const IMAGE_HOST: &str = "live.staticflickr.com";

/// User-facing sort filter, mapped onto the upstream `sort` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Relevant,
    Interesting,
    DateUploaded,
    DateTaken,
}

impl Filter {
    /// Unknown tokens fall back to [`Filter::Relevant`]. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "Relevant" => Filter::Relevant,
            "Interesting" => Filter::Interesting,
            // The gallery has always sent this token with the typo.
            "Data uploaded" => Filter::DateUploaded,
            "Date taken" => Filter::DateTaken,
            _ => Filter::Relevant,
        }
    }

    pub fn sort_value(self) -> &'static str {
        match self {
            Filter::Relevant => "relevance",
            Filter::Interesting => "interestingness-desc",
            Filter::DateUploaded => "date-posted-desc",
            Filter::DateTaken => "date-taken-desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_term: String,
    pub page: u32,
    pub filter: Filter,
}

impl SearchRequest {
    /// Page numbers below 1 are raised to 1.
    pub fn new(search_term: impl Into<String>, page: u32, filter: Filter) -> Self {
        Self {
            search_term: search_term.into(),
            page: page.max(1),
            filter,
        }
    }
}

/// Response envelope returned by `flickr.photos.search` and `flickr.photos.getRecent`.
#[derive(Debug, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub photos: Option<UpstreamPhotoPage>,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamPhotoPage {
    #[serde(default)]
    pub photo: Option<Vec<UpstreamPhoto>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpstreamPhoto {
    pub id: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: i64,
    pub title: String,
    pub ispublic: u8,
    pub isfriend: u8,
    pub isfamily: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub server: String,
    pub secret: String,
    pub owner: String,
    pub farm: i64,
    pub is_public: bool,
    pub is_friend: bool,
    pub is_family: bool,
}

impl Photo {
    /// Medium-size (`_m`) image URL on the static host.
    pub fn image_url(&self) -> String {
        fn or_default(value: &str) -> &str {
            if value.is_empty() { "default" } else { value }
        }
        format!(
            "https://{}/{}/{}_{}_m.jpg",
            IMAGE_HOST,
            or_default(&self.server),
            or_default(&self.id),
            or_default(&self.secret)
        )
    }
}

impl From<UpstreamPhoto> for Photo {
    fn from(p: UpstreamPhoto) -> Self {
        Photo {
            id: p.id,
            title: p.title,
            server: p.server,
            secret: p.secret,
            owner: p.owner,
            farm: p.farm,
            is_public: p.ispublic != 0,
            is_friend: p.isfriend != 0,
            is_family: p.isfamily != 0,
        }
    }
}

impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Photo", 10)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("title", &self.title)?;
        s.serialize_field("server", &self.server)?;
        s.serialize_field("secret", &self.secret)?;
        s.serialize_field("owner", &self.owner)?;
        s.serialize_field("farm", &self.farm)?;
        s.serialize_field("isPublic", &self.is_public)?;
        s.serialize_field("isFriend", &self.is_friend)?;
        s.serialize_field("isFamily", &self.is_family)?;
        s.serialize_field("imageUrl", &self.image_url())?;
        s.end()
    }
}
