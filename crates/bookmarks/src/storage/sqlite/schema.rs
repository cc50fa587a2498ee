//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

pub use bookmarks_core::dump::CREATE_TABLE;

pub const INSERT_BOOKMARK: &str = r#"
INSERT INTO bookmarks (title, url, tags, favicon, createdAt)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_BOOKMARK_BY_ID: &str = r#"
SELECT id, title, url, tags, favicon, createdAt
FROM bookmarks
WHERE id = ?1
"#;

pub const SELECT_ALL_BOOKMARKS: &str = r#"
SELECT id, title, url, tags, favicon, createdAt
FROM bookmarks
ORDER BY id
"#;

pub const UPDATE_BOOKMARK: &str = r#"
UPDATE bookmarks
SET title = ?2, url = ?3, tags = ?4, favicon = ?5
WHERE id = ?1
"#;

pub const DELETE_BOOKMARK: &str = r#"
DELETE FROM bookmarks
WHERE id = ?1
"#;

pub const SELECT_ALL_TAGS: &str = r#"
SELECT tags
FROM bookmarks
"#;
