use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone, Utc};

use crate::timestamp::format_timestamp;

use super::types::BookmarkRow;

/// Table definition written at the top of every dump.
pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS bookmarks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    url TEXT NOT NULL,
    tags TEXT NOT NULL,
    favicon TEXT NOT NULL,
    createdAt TEXT NOT NULL
)";

/// Escapes a value for a single-quoted SQL string literal.
pub fn escape_sql_text(value: &str) -> String {
    value.replace('\'', "''")
}

/// Renders a full snapshot of `rows` as an executable script.
///
/// Rows are written in the order given; callers pass them sorted by id.
pub fn render_dump(rows: &[BookmarkRow], generated_at: &DateTime<Utc>) -> String {
    let mut dump = String::new();

    dump.push_str("-- Bookmarks table dump\n");
    let _ = writeln!(dump, "-- Generated on: {}", format_timestamp(generated_at));
    dump.push('\n');
    dump.push_str(CREATE_TABLE);
    dump.push_str(";\n\n");

    if rows.is_empty() {
        dump.push_str("-- No bookmarks found");
        return dump;
    }

    dump.push_str("-- Insert bookmarks data");
    for row in rows {
        let _ = write!(
            dump,
            "\nINSERT INTO bookmarks (id, title, url, tags, favicon, createdAt) \
             VALUES ({}, '{}', '{}', '{}', '{}', '{}');",
            row.id,
            escape_sql_text(&row.title),
            escape_sql_text(&row.url),
            escape_sql_text(&row.tags),
            escape_sql_text(&row.favicon),
            escape_sql_text(&row.created_at),
        );
    }

    dump
}

/// Suggested download file name for an export taken at `at`.
pub fn export_filename<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("bookmarks_export_{}.sql", at.format("%Y%m%d_%H%M%S"))
}
