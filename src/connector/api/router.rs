use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use super::container::Container;
use super::controller::InterviewController;

/// HTTP surface of the relay.
///
/// - `/` and `/interview` relay one exchange for any method but `OPTIONS`;
///   a request without a usable JSON body gets the generic JSON 500
/// - `OPTIONS` on the same paths answers CORS preflight with an empty body
/// - `GET /health` is a liveness probe
///
/// Every response carries permissive CORS headers.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", any(relay).options(preflight))
        .route("/interview", any(relay).options(preflight))
        .route("/health", get(health))
        .with_state(container)
        .layer(CorsLayer::permissive())
}

async fn relay(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    InterviewController::new(&container)
        .relay(&body)
        .await
        .into_response()
}

// Normally short-circuited by the CORS layer.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
