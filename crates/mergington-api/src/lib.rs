//! HTTP API for the Mergington activities service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /`** redirecting browsers to the static frontend
//! - **`GET /activities`** listing every activity and its roster
//! - **`POST /activities/{activity_name}/signup?email=...`** enrolling a
//!   student in an activity
//!
//! # Architecture
//!
//! Handlers share one [`ActivityStore`] through [`AppState`], injected with
//! Axum's `State` extractor. Store errors are plain [`Result`]s and are
//! translated to status codes by [`ApiError`].
//!
//! [`ActivityStore`]: mergington_activities::ActivityStore
//! [`ApiError`]: error::ApiError

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::{AppState, DEFAULT_REDIRECT_TARGET};
