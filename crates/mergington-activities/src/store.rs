//! The shared activity store.
//!
//! [`ActivityStore`] owns the name-to-activity map behind a
//! [`tokio::sync::RwLock`]. Listing takes the read lock; signup takes the
//! write lock for the whole lookup, duplicate check, and append, so two
//! concurrent signups of the same email can never both succeed.

use std::collections::BTreeMap;

use mergington_types::{Activity, SignupMessage};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::ActivityError;
use crate::seed::seed_activities;

/// A completed signup, echoed back for confirmation messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    /// The activity joined.
    pub activity: String,
    /// The email added to the roster.
    pub email: String,
}

impl Signup {
    /// The confirmation body for this signup.
    pub fn message(&self) -> SignupMessage {
        SignupMessage::new(&self.email, &self.activity)
    }
}

/// In-memory registry of activities keyed by name.
///
/// Activities are never added, removed, or renamed after construction.
/// Rosters only grow.
#[derive(Debug)]
pub struct ActivityStore {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityStore {
    /// Create a store holding exactly `activities`.
    pub fn from_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Create a store loaded with the startup activities.
    pub fn with_seed_data() -> Self {
        Self::from_activities(seed_activities())
    }

    /// Snapshot of every activity, keyed by name.
    pub async fn get_all(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Snapshot of a single activity.
    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.read().await.get(activity_name).cloned()
    }

    /// Number of registered activities.
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Whether the store holds no activities.
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Add `email` to the roster of `activity_name`.
    ///
    /// The name and email are matched verbatim. `max_participants` is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// - [`ActivityError::NotFound`] if no activity has that name.
    /// - [`ActivityError::AlreadyRegistered`] if the email is already
    ///   enrolled. The roster is left unchanged.
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Signup, ActivityError> {
        let mut activities = self.activities.write().await;

        let Some(activity) = activities.get_mut(activity_name) else {
            debug!(activity = activity_name, email, "signup for unknown activity");
            return Err(ActivityError::NotFound {
                activity: activity_name.to_owned(),
            });
        };

        if activity.is_enrolled(email) {
            debug!(activity = activity_name, email, "duplicate signup rejected");
            return Err(ActivityError::AlreadyRegistered {
                activity: activity_name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());
        info!(
            activity = activity_name,
            email,
            participants = activity.participant_count(),
            "student signed up"
        );

        Ok(Signup {
            activity: activity_name.to_owned(),
            email: email.to_owned(),
        })
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}
