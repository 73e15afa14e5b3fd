//! Derived-fact calculators.
//!
//! Pure functions over plan data, evaluated on demand and never cached:
//!
//! - [`gpa`]: credit-weighted grade point averages
//! - [`conflicts`]: pairwise schedule conflict detection
//! - [`schedule`]: the flattened weekly timetable
//! - [`credits`]: credit totals and degree progress

pub mod conflicts;
pub mod credits;
pub mod gpa;
pub mod schedule;

pub use conflicts::{detect_conflicts, ScheduleConflict, TimeOverlap};
pub use credits::{completed_credits, degree_progress, total_credits};
pub use gpa::{cumulative_gpa, gpa, semester_gpa};
pub use schedule::{weekly_schedule, ScheduleEntry};
