//! Activities available when the process starts.
//!
//! Three activities with two students each. Every restart begins from
//! exactly this state.

use std::collections::BTreeMap;

use mergington_types::Activity;

/// Helper to build a seeded [`Activity`].
fn activity(desc: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    Activity::new(
        desc,
        schedule,
        max,
        participants.iter().map(|p| (*p).to_owned()).collect(),
    )
}

/// Build the starting activity map, keyed by activity name.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_owned(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_owned(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_owned(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );

    activities
}
