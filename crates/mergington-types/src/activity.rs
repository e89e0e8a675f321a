//! The extracurricular activity record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An extracurricular offering with its schedule, capacity, and roster.
///
/// Activities are keyed by name in the store, so the name is not part of
/// the record itself. Serializes to exactly the four fields the
/// `GET /activities` endpoint exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text description of what the activity involves.
    pub description: String,
    /// Free-text description of when the activity meets.
    pub schedule: String,
    /// Advertised capacity. Not enforced at signup.
    pub max_participants: u32,
    /// Student emails in signup order. Never contains duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    /// Build an activity with an initial roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Whether `email` is already on the roster.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of enrolled students.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            vec![
                "michael@mergington.edu".to_owned(),
                "daniel@mergington.edu".to_owned(),
            ],
        )
    }

    #[test]
    fn is_enrolled_matches_exact_email() {
        let activity = chess();
        assert!(activity.is_enrolled("michael@mergington.edu"));
        assert!(!activity.is_enrolled("Michael@mergington.edu"));
        assert!(!activity.is_enrolled("michael"));
    }

    #[test]
    fn serializes_to_four_fields() {
        let json = serde_json::to_value(chess()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(json["participants"][1], "daniel@mergington.edu");
    }

    #[test]
    fn participant_count_tracks_roster() {
        let mut activity = chess();
        assert_eq!(activity.participant_count(), 2);
        activity.participants.push("new@mergington.edu".to_owned());
        assert_eq!(activity.participant_count(), 3);
    }
}
