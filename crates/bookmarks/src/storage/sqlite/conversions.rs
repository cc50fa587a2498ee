//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use bookmarks_core::bookmark::Bookmark;
use bookmarks_core::dump::BookmarkRow;
use bookmarks_core::storage::RepositoryError;
use rusqlite::Row;

/// Column index of `tags` in bookmark queries.
const TAGS_COLUMN: usize = 3;

/// Convert a SQLite row to a Bookmark.
///
/// Expected columns: id, title, url, tags, favicon, createdAt
pub fn row_to_bookmark(row: &Row) -> rusqlite::Result<Bookmark> {
    let tags_json: String = row.get(TAGS_COLUMN)?;

    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        tags: json_to_tags_internal(&tags_json)?,
        favicon: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Convert a SQLite row to a raw BookmarkRow, leaving `tags` serialized.
///
/// Expected columns: id, title, url, tags, favicon, createdAt
pub fn row_to_bookmark_row(row: &Row) -> rusqlite::Result<BookmarkRow> {
    Ok(BookmarkRow {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        tags: row.get(TAGS_COLUMN)?,
        favicon: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Serialize tags to the JSON array stored in the `tags` column.
pub fn tags_to_json(tags: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(tags).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Internal version that returns rusqlite::Result for use in row conversions.
fn json_to_tags_internal(json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            TAGS_COLUMN,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}
