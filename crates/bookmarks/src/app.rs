use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        bookmarks::{create_bookmark, delete_bookmark, list_bookmarks, update_bookmark},
        dump::{export_bookmarks, restore_bookmarks},
        health::health,
        help::help,
        tags::list_tags,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration, open to any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/list", get(list_bookmarks))
        .route("/create", post(create_bookmark))
        .route("/update/{id}", put(update_bookmark))
        .route("/delete/{id}", delete(delete_bookmark))
        .route("/export", get(export_bookmarks))
        .route("/restore", post(restore_bookmarks))
        .route("/tags", get(list_tags));

    Router::new()
        .route("/help", get(help))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
