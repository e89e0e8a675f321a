//! Shared type definitions for the Mergington activities service.
//!
//! Everything that crosses the HTTP boundary lives here so the store, the
//! API layer, and the static frontend agree on one shape. Types are exported
//! to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`activity`] -- The [`Activity`] record and its roster helpers
//! - [`responses`] -- JSON bodies returned by the signup endpoint

pub mod activity;
pub mod responses;

pub use activity::Activity;
pub use responses::{ErrorDetail, SignupMessage};
