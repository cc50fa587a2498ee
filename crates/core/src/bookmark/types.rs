use serde::{Deserialize, Serialize};

/// A persisted bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub favicon: String,
    /// Client-supplied creation timestamp, stored verbatim.
    pub created_at: String,
}

/// A bookmark that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub favicon: String,
    pub created_at: String,
}

impl NewBookmark {
    /// Attach the storage-assigned id.
    pub fn with_id(self, id: i64) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            tags: self.tags,
            favicon: self.favicon,
            created_at: self.created_at,
        }
    }
}
