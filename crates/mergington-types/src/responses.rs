//! JSON response bodies for the activities API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Confirmation body returned by a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SignupMessage {
    /// Human-readable confirmation, e.g. `Signed up a@b.edu for Chess Club`.
    pub message: String,
}

impl SignupMessage {
    /// Build the confirmation for `email` joining `activity_name`.
    pub fn new(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }
}

/// Error body returned for every rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorDetail {
    /// Why the request was rejected.
    pub detail: String,
}

impl ErrorDetail {
    /// Wrap a message as an error body.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
