use thiserror::Error;

use crate::storage::RepositoryError;

use super::split::truncate_statement;

/// Errors that abort a restore. The store is rolled back when one occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// The request carried no dump text.
    #[error("No SQL dump provided")]
    EmptyDump,
    /// A statement failed for a reason other than "already exists".
    #[error("SQL execution error: {message}")]
    Statement {
        /// The failing statement, truncated for display.
        statement: String,
        message: String,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RestoreError {
    /// Builds a statement failure, truncating the statement text.
    pub fn statement(sql: &str, message: impl Into<String>) -> Self {
        Self::Statement {
            statement: truncate_statement(sql),
            message: message.into(),
        }
    }

    /// The failing statement, if the restore failed on one.
    pub fn failed_statement(&self) -> Option<&str> {
        match self {
            Self::Statement { statement, .. } => Some(statement),
            Self::EmptyDump | Self::Repository(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_error_display() {
        let error = RestoreError::statement("INSERT INTO nope VALUES (1)", "no such table: nope");

        assert_eq!(error.to_string(), "SQL execution error: no such table: nope");
        assert_eq!(error.failed_statement(), Some("INSERT INTO nope VALUES (1)"));
    }

    #[test]
    fn test_statement_error_truncates() {
        let sql = format!("INSERT INTO bookmarks VALUES ('{}')", "z".repeat(200));

        let error = RestoreError::statement(&sql, "boom");

        assert!(error.failed_statement().unwrap().ends_with("..."));
    }

    #[test]
    fn test_empty_dump_display() {
        assert_eq!(RestoreError::EmptyDump.to_string(), "No SQL dump provided");
        assert_eq!(RestoreError::EmptyDump.failed_statement(), None);
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let error = RestoreError::from(RepositoryError::ConnectionFailed("gone".to_string()));

        assert_eq!(error.to_string(), "Connection failed: gone");
        assert_eq!(error.failed_statement(), None);
    }
}
