use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use bookmarks_core::timestamp::format_timestamp;

/// GET /api/health - Liveness check.
///
/// Returns 200 with the current UTC time. Touches no storage.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": format_timestamp(&Utc::now()),
    }))
}
