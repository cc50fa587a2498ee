use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use bookmarks_core::bookmark::BookmarkError;
use bookmarks_core::dump::RestoreError;
use bookmarks_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error returned by every API handler.
///
/// Wraps `anyhow::Error` and inspects the underlying core error to choose the
/// status code. Context added with `anyhow::Context` is kept in the message.
pub struct AppError(pub anyhow::Error);

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_statement: Option<String>,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(repo_error);
        }
        if self.0.downcast_ref::<BookmarkError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        if let Some(restore_error) = self.0.downcast_ref::<RestoreError>() {
            return match restore_error {
                RestoreError::EmptyDump => StatusCode::BAD_REQUEST,
                RestoreError::Statement { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                RestoreError::Repository(repo_error) => repository_status(repo_error),
            };
        }
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            // Well-formed JSON of the wrong shape is still a bad request.
            return match rejection {
                JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                other => other.status(),
            };
        }
        if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            return rejection.status();
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn body(&self) -> ErrorBody {
        let (message, failed_statement) = match (
            self.0.downcast_ref::<RepositoryError>(),
            self.0.downcast_ref::<RestoreError>(),
        ) {
            (Some(RepositoryError::NotFound { entity_type, .. }), _) => {
                (format!("{entity_type} not found"), None)
            }
            (_, Some(e @ (RestoreError::EmptyDump | RestoreError::Statement { .. }))) => {
                (e.to_string(), e.failed_statement().map(str::to_string))
            }
            _ => (self.rejection_text().unwrap_or_else(|| format!("{:#}", self.0)), None),
        };

        ErrorBody {
            status: "error",
            message,
            failed_statement,
        }
    }

    fn rejection_text(&self) -> Option<String> {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return Some(rejection.body_text());
        }
        self.0
            .downcast_ref::<PathRejection>()
            .map(PathRejection::body_text)
    }
}

fn repository_status(error: &RepositoryError) -> StatusCode {
    let code = repository_error_to_status_code(error);
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %body.message, "API error");
        } else {
            tracing::warn!(status = %status, message = %body.message, "API error");
        }

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
