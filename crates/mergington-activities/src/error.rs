//! Error types for the `mergington-activities` crate.
//!
//! The `Display` text of each variant is the exact message reported to
//! API clients.

/// Reasons a signup can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    /// No activity is registered under the requested name.
    #[error("Activity not found")]
    NotFound {
        /// The name that was looked up.
        activity: String,
    },

    /// The email is already on the activity's roster.
    #[error("Student is already signed up")]
    AlreadyRegistered {
        /// The activity being joined.
        activity: String,
        /// The duplicate email.
        email: String,
    },
}
