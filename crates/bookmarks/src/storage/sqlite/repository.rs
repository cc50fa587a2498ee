//! SQLite repository implementation.
//!
//! Implements the repository traits from `bookmarks_core::storage` using SQLite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookmarks_core::bookmark::{Bookmark, NewBookmark};
use bookmarks_core::dump::{BookmarkRow, DumpStatement, RestoreError, RestoreSummary};
use bookmarks_core::storage::{BookmarkRepository, DumpRepository, Result};

use super::conversions::{row_to_bookmark, row_to_bookmark_row, tags_to_json};
use super::error::{is_already_exists, map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = "bookmark";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds only the database path. Each operation opens a fresh connection,
/// runs on it, and closes it.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Creates a repository backed by the database file at `path`.
    ///
    /// The file is created if it doesn't exist and the `bookmarks` table is
    /// created if missing.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Self {
            path: path.as_ref().to_path_buf(),
        };
        repo.init_schema().await?;
        Ok(repo)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn init_schema(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::CREATE_TABLE).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    /// Runs `operation` on a connection opened for this call only.
    async fn with_connection<F, R>(&self, operation: F) -> tokio_rusqlite::Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Connection::open(&self.path).await?;
        let result = conn.call(operation).await;
        conn.close().await?;
        result
    }
}

// ============================================================================
// BookmarkRepository implementation
// ============================================================================

#[async_trait]
impl BookmarkRepository for SqliteRepository {
    async fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<i64> {
        let title = bookmark.title.clone();
        let url = bookmark.url.clone();
        let tags = tags_to_json(&bookmark.tags)?;
        let favicon = bookmark.favicon.clone();
        let created_at = bookmark.created_at.clone();

        self.with_connection(move |conn| {
            conn.execute(
                schema::INSERT_BOOKMARK,
                rusqlite::params![title, url, tags, favicon, created_at],
            )
            .map_err(wrap_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>> {
        self.with_connection(move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_BOOKMARK_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id], row_to_bookmark) {
                Ok(bookmark) => Ok(Some(bookmark)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_ALL_BOOKMARKS)
                .map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_bookmark).map_err(wrap_err)?;

            let mut bookmarks = Vec::new();
            for row_result in rows {
                bookmarks.push(row_result.map_err(wrap_err)?);
            }
            Ok(bookmarks)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn update_bookmark(&self, bookmark: &Bookmark) -> Result<()> {
        let id = bookmark.id;
        let title = bookmark.title.clone();
        let url = bookmark.url.clone();
        let tags = tags_to_json(&bookmark.tags)?;
        let favicon = bookmark.favicon.clone();

        self.with_connection(move |conn| {
            let rows = conn
                .execute(
                    schema::UPDATE_BOOKMARK,
                    rusqlite::params![id, title, url, tags, favicon],
                )
                .map_err(wrap_err)?;
            if rows == 0 {
                Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn delete_bookmark(&self, id: i64) -> Result<()> {
        self.with_connection(move |conn| {
            let rows = conn
                .execute(schema::DELETE_BOOKMARK, [id])
                .map_err(wrap_err)?;
            if rows == 0 {
                Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn list_tag_cells(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_ALL_TAGS).map_err(wrap_err)?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(wrap_err)?;

            let mut cells = Vec::new();
            for row_result in rows {
                cells.push(row_result.map_err(wrap_err)?);
            }
            Ok(cells)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}

// ============================================================================
// DumpRepository implementation
// ============================================================================

#[async_trait]
impl DumpRepository for SqliteRepository {
    async fn dump_rows(&self) -> Result<Vec<BookmarkRow>> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_ALL_BOOKMARKS)
                .map_err(wrap_err)?;
            let rows = stmt
                .query_map([], row_to_bookmark_row)
                .map_err(wrap_err)?;

            let mut results = Vec::new();
            for row_result in rows {
                results.push(row_result.map_err(wrap_err)?);
            }
            Ok(results)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn restore(
        &self,
        statements: Vec<DumpStatement>,
    ) -> std::result::Result<RestoreSummary, RestoreError> {
        let outcome: std::result::Result<RestoreSummary, RestoreError> = self
            .with_connection(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let mut summary = RestoreSummary::default();

                for statement in &statements {
                    match tx.execute_batch(&statement.sql) {
                        Ok(()) => summary.record(statement),
                        Err(e) if is_already_exists(&e) => {
                            tracing::debug!(error = %e, "Skipping statement for existing object");
                        }
                        // Dropping the transaction rolls back everything executed so far.
                        Err(e) => {
                            return Ok(Err(RestoreError::statement(&statement.sql, e.to_string())));
                        }
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(Ok(summary))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarks_core::dump::{render_dump, split_statements};
    use bookmarks_core::storage::RepositoryError;
    use tempfile::TempDir;

    async fn repository() -> (TempDir, SqliteRepository) {
        let dir = TempDir::new().unwrap();
        let repo = SqliteRepository::new(dir.path().join("bookmarks.db"))
            .await
            .unwrap();
        (dir, repo)
    }

    fn new_bookmark(url: &str, tags: &[&str]) -> NewBookmark {
        NewBookmark {
            title: format!("Title for {url}"),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            favicon: "https://www.google.com/s2/favicons?domain=example.com&sz=128".to_string(),
            created_at: "2025-07-12T12:34:56Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let (_dir, repo) = repository().await;

        let first = repo
            .create_bookmark(&new_bookmark("https://a.example", &[]))
            .await
            .unwrap();
        let second = repo
            .create_bookmark(&new_bookmark("https://b.example", &[]))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.get_bookmark(first).await.unwrap().unwrap().url, "https://a.example");
        assert_eq!(repo.get_bookmark(second).await.unwrap().unwrap().url, "https://b.example");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (_dir, repo) = repository().await;

        assert!(repo.get_bookmark(99999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order_with_tags() {
        let (_dir, repo) = repository().await;
        repo.create_bookmark(&new_bookmark("https://a.example", &["x", "y"]))
            .await
            .unwrap();
        repo.create_bookmark(&new_bookmark("https://b.example", &[]))
            .await
            .unwrap();

        let bookmarks = repo.list_bookmarks().await.unwrap();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].url, "https://a.example");
        assert_eq!(bookmarks[0].tags, vec!["x", "y"]);
        assert!(bookmarks[1].tags.is_empty());
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookmarks.db");
        let id = SqliteRepository::new(&path)
            .await
            .unwrap()
            .create_bookmark(&new_bookmark("https://a.example", &[]))
            .await
            .unwrap();

        let reopened = SqliteRepository::new(&path).await.unwrap();

        assert!(reopened.get_bookmark(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_not_created_at() {
        let (_dir, repo) = repository().await;
        let id = repo
            .create_bookmark(&new_bookmark("https://a.example", &["x"]))
            .await
            .unwrap();
        let mut bookmark = repo.get_bookmark(id).await.unwrap().unwrap();
        bookmark.title = "New".to_string();
        bookmark.tags = vec!["z".to_string()];
        bookmark.created_at = "ignored".to_string();

        repo.update_bookmark(&bookmark).await.unwrap();

        let stored = repo.get_bookmark(id).await.unwrap().unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.tags, vec!["z"]);
        assert_eq!(stored.created_at, "2025-07-12T12:34:56Z");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_dir, repo) = repository().await;
        let ghost = new_bookmark("https://ghost.example", &[]).with_id(404);

        let result = repo.update_bookmark(&ghost).await;

        assert_eq!(result, Err(RepositoryError::bookmark_not_found(404)));
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, repo) = repository().await;
        let id = repo
            .create_bookmark(&new_bookmark("https://a.example", &[]))
            .await
            .unwrap();

        repo.delete_bookmark(id).await.unwrap();

        assert!(repo.get_bookmark(id).await.unwrap().is_none());
        assert_eq!(
            repo.delete_bookmark(id).await,
            Err(RepositoryError::bookmark_not_found(id))
        );
    }

    #[tokio::test]
    async fn test_delete_on_empty_store_is_not_found() {
        let (_dir, repo) = repository().await;

        assert_eq!(
            repo.delete_bookmark(99999).await,
            Err(RepositoryError::bookmark_not_found(99999))
        );
    }

    #[tokio::test]
    async fn test_list_tag_cells_returns_raw_values() {
        let (_dir, repo) = repository().await;
        repo.create_bookmark(&new_bookmark("https://a.example", &["a", "b"]))
            .await
            .unwrap();

        let cells = repo.list_tag_cells().await.unwrap();

        assert_eq!(cells, vec![r#"["a","b"]"#.to_string()]);
    }

    #[tokio::test]
    async fn test_export_then_restore_into_empty_store() {
        let (_source_dir, source) = repository().await;
        source
            .create_bookmark(&new_bookmark("https://a.example/it's", &["a", "b"]))
            .await
            .unwrap();
        source
            .create_bookmark(&new_bookmark("https://b.example", &[]))
            .await
            .unwrap();
        let rows = source.dump_rows().await.unwrap();
        let dump = render_dump(&rows, &chrono::Utc::now());

        let (_target_dir, target) = repository().await;
        let summary = target.restore(split_statements(&dump)).await.unwrap();

        assert_eq!(summary.imported_bookmarks, rows.len());
        assert_eq!(summary.executed_statements, rows.len() + 1);
        assert_eq!(target.dump_rows().await.unwrap(), rows);
        assert_eq!(
            target.list_bookmarks().await.unwrap(),
            source.list_bookmarks().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_restore_skips_already_exists_errors() {
        let (_dir, repo) = repository().await;
        let statements = split_statements(
            "CREATE TABLE bookmarks (id INTEGER);
             INSERT INTO bookmarks (title, url, tags, favicon, createdAt) VALUES ('t', 'u', '[]', 'f', 'c');",
        );

        let summary = repo.restore(statements).await.unwrap();

        assert_eq!(summary.executed_statements, 1);
        assert_eq!(summary.imported_bookmarks, 1);
        assert_eq!(repo.list_bookmarks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_restore_rolls_back() {
        let (_dir, repo) = repository().await;
        repo.create_bookmark(&new_bookmark("https://kept.example", &[]))
            .await
            .unwrap();
        let before = repo.dump_rows().await.unwrap();
        let statements = split_statements(
            "INSERT INTO bookmarks (title, url, tags, favicon, createdAt) VALUES ('t', 'u', '[]', 'f', 'c');
             DELETE FROM bookmarks WHERE url = 'https://kept.example';
             INSERT INTO missing_table VALUES (1);",
        );

        let err = repo.restore(statements).await.unwrap_err();

        assert_eq!(
            err.failed_statement(),
            Some("INSERT INTO missing_table VALUES (1)")
        );
        assert!(err.to_string().contains("no such table"));
        assert_eq!(repo.dump_rows().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_restore_with_conflicting_id_fails() {
        let (_dir, repo) = repository().await;
        let id = repo
            .create_bookmark(&new_bookmark("https://a.example", &[]))
            .await
            .unwrap();
        let statements = split_statements(&format!(
            "INSERT INTO bookmarks (id, title, url, tags, favicon, createdAt) VALUES ({id}, 't', 'u', '[]', 'f', 'c');"
        ));

        let err = repo.restore(statements).await.unwrap_err();

        assert!(err.to_string().contains("UNIQUE constraint failed"));
        assert_eq!(repo.list_bookmarks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_open_failure_is_connection_failed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("bookmarks.db");

        let result = SqliteRepository::new(&path).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
