//! Bookmark CRUD handlers.
//!
//! Creation and url changes run the enricher on the request path before the
//! record is written.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use bookmarks_core::bookmark::{
    plan_update, CreateBookmarkRequest, Enrichment, UpdateBookmarkRequest, UpdatePlan,
};
use bookmarks_core::metadata::favicon_url;
use bookmarks_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all bookmarks (GET /api/list).
pub async fn list_bookmarks(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let bookmarks = state.bookmarks.list_bookmarks().await?;

    Ok(Json(json!({
        "status": "success",
        "bookmarks": bookmarks,
    })))
}

/// Create a bookmark (POST /api/create).
pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(request) = payload?;
    tracing::debug!(request = ?request, "Received create bookmark request");

    let draft = request.validate()?;
    let title = state.enricher.extract_title(&draft.url).await;
    let favicon = favicon_url(&draft.url);
    let bookmark = draft.into_new_bookmark(title, favicon);

    let id = state.bookmarks.create_bookmark(&bookmark).await?;

    tracing::info!(id, url = %bookmark.url, title = %bookmark.title, "Created bookmark");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "bookmark created successfully",
            "id": id,
            "title": bookmark.title,
            "favicon": bookmark.favicon,
        })),
    ))
}

/// Update a bookmark (PUT /api/update/{id}).
///
/// Any subset of title, url and tags may be sent. A new url without a title
/// re-extracts the title; a new url always re-derives the favicon.
pub async fn update_bookmark(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateBookmarkRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;

    let current = state
        .bookmarks
        .get_bookmark(id)
        .await?
        .ok_or_else(|| RepositoryError::bookmark_not_found(id))?;

    let UpdatePlan {
        mut bookmark,
        enrichment,
    } = plan_update(&current, request)?;

    match enrichment {
        Enrichment::Unchanged => {}
        Enrichment::Favicon => {
            bookmark.favicon = favicon_url(&bookmark.url);
        }
        Enrichment::TitleAndFavicon => {
            bookmark.title = state.enricher.extract_title(&bookmark.url).await;
            bookmark.favicon = favicon_url(&bookmark.url);
        }
    }

    state.bookmarks.update_bookmark(&bookmark).await?;

    tracing::info!(id, enrichment = ?enrichment, "Updated bookmark");

    Ok(Json(json!({
        "status": "success",
        "message": "bookmark updated successfully",
        "id": bookmark.id,
        "title": bookmark.title,
        "url": bookmark.url,
        "tags": bookmark.tags,
        "favicon": bookmark.favicon,
    })))
}

/// Delete a bookmark (DELETE /api/delete/{id}).
pub async fn delete_bookmark(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    state.bookmarks.delete_bookmark(id).await?;

    tracing::info!(id, "Deleted bookmark");

    Ok(Json(json!({
        "status": "success",
        "message": "bookmark deleted successfully",
        "id": id,
    })))
}
