//! SQL dump export and import.
//!
//! A dump is a self-contained script: a header comment, the table definition,
//! and one `INSERT` per bookmark. Import splits a script on `;`, so semicolons
//! inside string literals are not supported.

mod error;
mod render;
mod split;
mod types;

pub use error::RestoreError;
pub use render::{escape_sql_text, export_filename, render_dump, CREATE_TABLE};
pub use split::{split_statements, truncate_statement, STATEMENT_PREVIEW_CHARS};
pub use types::{BookmarkRow, DumpStatement, RestoreSummary, StatementKind};
