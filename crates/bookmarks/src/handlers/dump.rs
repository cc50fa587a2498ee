//! SQL dump export and restore handlers.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{Local, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use bookmarks_core::dump::{export_filename, render_dump, split_statements, RestoreError};
use bookmarks_core::timestamp::format_timestamp;

use crate::{handlers::AppError, state::AppState};

/// Request body for POST /api/restore.
#[derive(Debug, Deserialize)]
pub struct RestoreRequest {
    #[serde(default)]
    pub sql_dump: Option<String>,
}

/// Export every bookmark as a SQL script (GET /api/export).
pub async fn export_bookmarks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.dumps.dump_rows().await.context("Export failed")?;

    let now = Utc::now();
    let sql_dump = render_dump(&rows, &now);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(&now.with_timezone(&Local))
    );

    tracing::info!(total_bookmarks = rows.len(), "Exported bookmarks");

    Ok((
        [(header::CONTENT_DISPOSITION, disposition)],
        Json(json!({
            "status": "success",
            "message": "Bookmarks exported successfully",
            "sql_dump": sql_dump,
            "export_date": format_timestamp(&now),
            "total_bookmarks": rows.len(),
        })),
    ))
}

/// Replay a SQL script inside one transaction (POST /api/restore).
///
/// "already exists" failures are skipped. Any other failure rolls the whole
/// restore back and reports the offending statement.
pub async fn restore_bookmarks(
    State(state): State<AppState>,
    payload: Result<Json<RestoreRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;

    let sql_dump = request
        .sql_dump
        .filter(|dump| !dump.is_empty())
        .ok_or(RestoreError::EmptyDump)?;

    let statements = split_statements(&sql_dump);
    tracing::debug!(statements = statements.len(), "Restoring SQL dump");

    let summary = state
        .dumps
        .restore(statements)
        .await
        .context("Restore failed")?;

    tracing::info!(
        executed_statements = summary.executed_statements,
        imported_bookmarks = summary.imported_bookmarks,
        "Restored bookmarks"
    );

    Ok(Json(json!({
        "status": "success",
        "message": "Bookmarks restored successfully",
        "executed_statements": summary.executed_statements,
        "imported_bookmarks": summary.imported_bookmarks,
        "restore_date": format_timestamp(&Utc::now()),
    })))
}
