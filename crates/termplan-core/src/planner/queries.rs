//! Derived-fact queries for the Planner.
//!
//! Thin wrappers that resolve an optional semester scope and hand the
//! matching courses to [`crate::calc`]. Nothing here is cached.

use super::Planner;
use crate::{
    calc::{self, ScheduleConflict, ScheduleEntry},
    error::{PlannerError, Result},
    models::Course,
};

impl Planner {
    /// Courses in scope: one semester when `semester_id` is given, otherwise
    /// every semester in plan order.
    fn scoped_courses(&self, semester_id: Option<&str>) -> Result<Vec<&Course>> {
        match semester_id {
            Some(id) => self
                .plan
                .semester(id)
                .map(|s| s.courses.iter().collect())
                .ok_or_else(|| PlannerError::SemesterNotFound { id: id.to_string() }),
            None => Ok(self.plan.courses().collect()),
        }
    }

    pub fn semester_gpa(&self, semester_id: &str) -> Result<f64> {
        self.plan
            .semester(semester_id)
            .map(calc::semester_gpa)
            .ok_or_else(|| PlannerError::SemesterNotFound {
                id: semester_id.to_string(),
            })
    }

    pub fn cumulative_gpa(&self) -> f64 {
        calc::cumulative_gpa(&self.plan)
    }

    /// Schedule conflicts within one semester, or across the whole plan.
    pub fn schedule_conflicts(&self, semester_id: Option<&str>) -> Result<Vec<ScheduleConflict>> {
        Ok(calc::detect_conflicts(self.scoped_courses(semester_id)?))
    }

    /// Weekly timetable sorted by weekday, then start time.
    pub fn current_schedule(&self, semester_id: Option<&str>) -> Result<Vec<ScheduleEntry<'_>>> {
        Ok(calc::weekly_schedule(self.scoped_courses(semester_id)?))
    }

    pub fn total_credits(&self, semester_id: Option<&str>) -> Result<u32> {
        Ok(calc::total_credits(self.scoped_courses(semester_id)?))
    }

    pub fn completed_credits(&self, semester_id: Option<&str>) -> Result<u32> {
        Ok(calc::completed_credits(self.scoped_courses(semester_id)?))
    }

    /// Percentage of the degree requirement already completed.
    pub fn degree_progress(&self) -> Option<f64> {
        calc::degree_progress(&self.plan)
    }
}
