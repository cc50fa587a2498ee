use super::error::BookmarkError;
use super::requests::UpdateBookmarkRequest;
use super::types::Bookmark;

/// Metadata that must be re-derived after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    /// The url did not change.
    Unchanged,
    /// The url changed and the caller supplied a title.
    Favicon,
    /// The url changed and the title must be extracted from the new page.
    TitleAndFavicon,
}

/// Result of applying an update request to a stored bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    /// The bookmark with the requested fields replaced.
    pub bookmark: Bookmark,
    pub enrichment: Enrichment,
}

/// Applies an update request to the current bookmark.
///
/// Blank titles are ignored so a stored title never becomes empty. A blank
/// url is rejected.
pub fn plan_update(
    current: &Bookmark,
    request: UpdateBookmarkRequest,
) -> Result<UpdatePlan, BookmarkError> {
    let title = request
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let url = match request.url {
        Some(url) => {
            let url = url.trim().to_string();
            if url.is_empty() {
                return Err(BookmarkError::EmptyField("url"));
            }
            url
        }
        None => current.url.clone(),
    };

    let enrichment = match (url != current.url, title.is_some()) {
        (false, _) => Enrichment::Unchanged,
        (true, true) => Enrichment::Favicon,
        (true, false) => Enrichment::TitleAndFavicon,
    };

    let bookmark = Bookmark {
        id: current.id,
        title: title.unwrap_or_else(|| current.title.clone()),
        url,
        tags: request.tags.unwrap_or_else(|| current.tags.clone()),
        favicon: current.favicon.clone(),
        created_at: current.created_at.clone(),
    };

    Ok(UpdatePlan {
        bookmark,
        enrichment,
    })
}
