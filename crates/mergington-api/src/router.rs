//! Axum router construction for the activities API.
//!
//! Assembles all routes into a single [`Router`] with CORS and HTTP
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- redirect to the static frontend
/// - `GET /activities` -- every activity keyed by name
/// - `POST /activities/{activity_name}/signup` -- enroll a student
///
/// CORS allows any origin so a frontend served from elsewhere can call
/// the API.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity_name}/signup", post(handlers::signup))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
