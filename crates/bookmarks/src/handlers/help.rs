//! Static API catalog served at `/help`.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// One documented endpoint.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    pub example_request: &'static str,
    pub example_response: Value,
}

#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub endpoints: Vec<EndpointDoc>,
}

/// GET /help - Endpoint catalog with example requests and responses.
pub async fn help() -> Json<HelpResponse> {
    Json(HelpResponse {
        endpoints: endpoint_catalog(),
    })
}

fn endpoint_catalog() -> Vec<EndpointDoc> {
    vec![
        EndpointDoc {
            path: "/api/health",
            method: "GET",
            description: "Check service health",
            example_request: "GET /api/health",
            example_response: json!({"status": "ok", "timestamp": "2025-07-12T12:34:56Z"}),
        },
        EndpointDoc {
            path: "/api/list",
            method: "GET",
            description: "List all bookmarks",
            example_request: "GET /api/list",
            example_response: json!({"status": "success", "bookmarks": []}),
        },
        EndpointDoc {
            path: "/api/create",
            method: "POST",
            description: "Create a new bookmark",
            example_request: "POST /api/create with JSON body {\"url\": \"http://example.com\", \"tags\": [\"tag1\"], \"createdAt\": \"2025-07-12T12:34:56Z\"}",
            example_response: json!({
                "status": "success",
                "message": "bookmark created successfully",
                "id": 1,
                "title": "Example",
                "favicon": "https://..."
            }),
        },
        EndpointDoc {
            path: "/api/update/<id>",
            method: "PUT",
            description: "Update an existing bookmark",
            example_request: "PUT /api/update/1 with JSON body {\"title\": \"New Title\"}",
            example_response: json!({
                "status": "success",
                "message": "bookmark updated successfully",
                "id": 1,
                "title": "New Title"
            }),
        },
        EndpointDoc {
            path: "/api/delete/<id>",
            method: "DELETE",
            description: "Delete a bookmark",
            example_request: "DELETE /api/delete/1",
            example_response: json!({
                "status": "success",
                "message": "bookmark deleted successfully",
                "id": 1
            }),
        },
        EndpointDoc {
            path: "/api/export",
            method: "GET",
            description: "Export bookmarks as SQL dump",
            example_request: "GET /api/export",
            example_response: json!({"status": "success", "sql_dump": "...", "total_bookmarks": 0}),
        },
        EndpointDoc {
            path: "/api/tags",
            method: "GET",
            description: "Get all unique tags from bookmarks in alphabetical order",
            example_request: "GET /api/tags",
            example_response: json!({
                "status": "success",
                "tags": ["docs", "icons", "inspiration"],
                "total_tags": 3
            }),
        },
        EndpointDoc {
            path: "/api/restore",
            method: "POST",
            description: "Restore bookmarks from SQL dump",
            example_request: "POST /api/restore with JSON body {\"sql_dump\": \"CREATE TABLE...; INSERT INTO...;\"}",
            example_response: json!({
                "status": "success",
                "message": "Bookmarks restored successfully",
                "imported_bookmarks": 5
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_api_endpoint() {
        let paths: Vec<&str> = endpoint_catalog().iter().map(|e| e.path).collect();

        assert_eq!(
            paths,
            vec![
                "/api/health",
                "/api/list",
                "/api/create",
                "/api/update/<id>",
                "/api/delete/<id>",
                "/api/export",
                "/api/tags",
                "/api/restore",
            ]
        );
    }
}
