use serde::Serialize;

/// A bookmark row exactly as stored, with `tags` still serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub tags: String,
    pub favicon: String,
    pub created_at: String,
}

/// Classification used for the imported-bookmark count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    BookmarkInsert,
    Other,
}

/// One executable statement from a dump, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpStatement {
    pub sql: String,
    pub kind: StatementKind,
}

impl DumpStatement {
    /// Classifies `sql` by its leading keywords.
    pub fn new(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        let kind = if sql
            .trim_start()
            .to_uppercase()
            .starts_with("INSERT INTO BOOKMARKS")
        {
            StatementKind::BookmarkInsert
        } else {
            StatementKind::Other
        };
        Self { sql, kind }
    }

    pub fn is_bookmark_insert(&self) -> bool {
        self.kind == StatementKind::BookmarkInsert
    }
}

/// Counts reported after a successful restore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RestoreSummary {
    pub executed_statements: usize,
    pub imported_bookmarks: usize,
}

impl RestoreSummary {
    /// Records one successfully executed statement.
    pub fn record(&mut self, statement: &DumpStatement) {
        self.executed_statements += 1;
        if statement.is_bookmark_insert() {
            self.imported_bookmarks += 1;
        }
    }
}
