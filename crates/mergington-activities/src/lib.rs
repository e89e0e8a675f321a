//! Activity registry for the Mergington activities service.
//!
//! Holds every extracurricular activity and its roster in memory for the
//! life of the process. The only mutation is signup, which appends a
//! student email to a roster after checking that the activity exists and
//! the student is not already enrolled.
//!
//! # Modules
//!
//! - [`error`] -- Signup failure modes.
//! - [`seed`] -- The fixed set of activities loaded at startup.
//! - [`store`] -- [`ActivityStore`], the lock-guarded name-to-activity map.

pub mod error;
pub mod seed;
pub mod store;

pub use error::ActivityError;
pub use seed::seed_activities;
pub use store::{ActivityStore, Signup};
