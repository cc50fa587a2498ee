use async_trait::async_trait;

use crate::bookmark::{Bookmark, NewBookmark};
use crate::dump::{BookmarkRow, DumpStatement, RestoreError, RestoreSummary};

use super::Result;

/// Repository for bookmark CRUD operations.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Creates a bookmark and returns its assigned id.
    async fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<i64>;

    /// Gets a bookmark by its id.
    async fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>>;

    /// Lists all bookmarks in insertion order.
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>>;

    /// Replaces the mutable fields of an existing bookmark.
    async fn update_bookmark(&self, bookmark: &Bookmark) -> Result<()>;

    /// Deletes a bookmark by its id.
    async fn delete_bookmark(&self, id: i64) -> Result<()>;

    /// Gets the serialized `tags` cell of every bookmark.
    async fn list_tag_cells(&self) -> Result<Vec<String>>;
}

/// Repository for whole-table snapshots.
#[async_trait]
pub trait DumpRepository: Send + Sync {
    /// Gets every row as stored, ordered by id.
    async fn dump_rows(&self) -> Result<Vec<BookmarkRow>>;

    /// Executes `statements` in one transaction.
    ///
    /// Statements failing with "already exists" are skipped. Any other
    /// failure rolls the whole restore back.
    async fn restore(
        &self,
        statements: Vec<DumpStatement>,
    ) -> std::result::Result<RestoreSummary, RestoreError>;
}
