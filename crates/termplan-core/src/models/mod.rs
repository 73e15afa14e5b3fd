//! Data models for the academic plan.
//!
//! The plan is a tree: a [`Plan`] owns an ordered list of [`Semester`]s, each
//! of which owns an ordered list of [`Course`]s. An optional [`Degree`] and
//! free-form notes hang off the root. Display implementations live in
//! [`crate::display::models`].
//!
//! All types serialize with camelCase field names so that the portable export
//! format and the in-memory model share one shape:
//!
//! ```rust
//! use termplan_core::models::{Course, Season, Semester};
//!
//! let semester = Semester {
//!     id: "s1".to_string(),
//!     name: "First year".to_string(),
//!     year: 2024,
//!     season: Season::Autumn,
//!     notes: None,
//!     is_active: Some(true),
//!     courses: vec![],
//! };
//! let json = serde_json::to_string(&semester).unwrap();
//! assert!(json.contains("\"isActive\":true"));
//! ```

pub mod calendar;
pub mod course;
pub mod degree;
pub mod plan;
pub mod semester;

#[cfg(test)]
mod tests;

pub use calendar::{Season, Weekday};
pub use course::Course;
pub use degree::Degree;
pub use plan::{NoteScope, Plan};
pub use semester::Semester;
