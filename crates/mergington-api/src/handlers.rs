//! REST API endpoint handlers for the activities server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the static frontend |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `POST` | `/activities/{activity_name}/signup` | Enroll `?email=` in an activity |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use mergington_types::{Activity, SignupMessage};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the signup endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct SignupQuery {
    /// The student's email. Accepted verbatim, no format validation.
    pub email: String,
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the frontend
// ---------------------------------------------------------------------------

/// Send the browser to the static frontend with a 307 redirect.
#[allow(clippy::unused_async)]
pub async fn index(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&state.redirect_target)
}

// ---------------------------------------------------------------------------
// GET /activities -- list activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name, with description, schedule,
/// capacity, and roster.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.store.get_all().await)
}

// ---------------------------------------------------------------------------
// POST /activities/{activity_name}/signup -- enroll a student
// ---------------------------------------------------------------------------

/// Sign a student up for an activity.
///
/// The activity name comes from the percent-decoded path segment, so
/// `Chess%20Club` addresses "Chess Club".
///
/// # Query Parameters
///
/// - `email` (required): the student's email
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<SignupMessage>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;

    let signup = state.store.signup(&activity_name, &params.email).await?;

    Ok(Json(signup.message()))
}
