use anyhow::Context;
use axum::{extract::State, Json};
use serde_json::{json, Value};

use bookmarks_core::tags::collect_tags;

use crate::{handlers::AppError, state::AppState};

/// Distinct tags across all bookmarks, sorted (GET /api/tags).
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cells = state
        .bookmarks
        .list_tag_cells()
        .await
        .context("Failed to retrieve tags")?;

    let tags = collect_tags(&cells);

    Ok(Json(json!({
        "status": "success",
        "total_tags": tags.len(),
        "tags": tags,
    })))
}
