//! API request types for bookmark operations.
//!
//! Pure data types with no I/O. Optional fields mirror the JSON API, where
//! clients may omit anything; validation turns them into domain values.

use serde::{Deserialize, Serialize};

use super::error::BookmarkError;
use super::types::NewBookmark;

/// Request payload for creating a bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

/// A create request whose required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub url: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl BookmarkDraft {
    /// Complete the draft with the derived title and favicon.
    pub fn into_new_bookmark(self, title: String, favicon: String) -> NewBookmark {
        NewBookmark {
            title,
            url: self.url,
            tags: self.tags,
            favicon,
            created_at: self.created_at,
        }
    }
}

impl CreateBookmarkRequest {
    /// Create a request for the given url and timestamp.
    pub fn new(url: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            tags: None,
            created_at: Some(created_at.into()),
        }
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Check required fields. Missing tags default to an empty list.
    pub fn validate(self) -> Result<BookmarkDraft, BookmarkError> {
        let url = required(self.url, "url")?;
        let created_at = required(self.created_at, "createdAt")?;

        Ok(BookmarkDraft {
            url,
            tags: self.tags.unwrap_or_default(),
            created_at,
        })
    }
}

/// Request payload for updating a bookmark. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateBookmarkRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, BookmarkError> {
    let value = value.ok_or(BookmarkError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookmarkError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
