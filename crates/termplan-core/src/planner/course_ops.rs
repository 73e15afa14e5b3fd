//! Course operations for the Planner.
//!
//! Courses are always addressed through their semester. Moving a course to
//! another semester is a remove followed by an add, which gives it a new id
//! and a new color.

use log::debug;

use super::{apply_reorder, new_id, Planner};
use crate::{
    error::{PlannerError, Result},
    history::ActionKind,
    models::Course,
    params::{CreateCourse, Reorder, UpdateCourse},
    validation::validate_course,
};

impl Planner {
    /// Resolves `(semester index, course index)` for a course that must live
    /// in the given semester.
    fn course_index_or_err(&self, semester_id: &str, course_id: &str) -> Result<(usize, usize)> {
        let si = self
            .plan
            .semester_index(semester_id)
            .ok_or_else(|| PlannerError::SemesterNotFound {
                id: semester_id.to_string(),
            })?;
        let ci = self.plan.semesters[si]
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| PlannerError::CourseNotFound {
                id: course_id.to_string(),
            })?;
        Ok((si, ci))
    }

    /// Appends a course to a semester. The color is taken from the palette
    /// by the semester's current course count, and is never reassigned later.
    pub fn add_course(&mut self, semester_id: &str, params: &CreateCourse) -> Result<Course> {
        let si = self
            .plan
            .semester_index(semester_id)
            .ok_or_else(|| PlannerError::SemesterNotFound {
                id: semester_id.to_string(),
            })?;

        let sibling_count = self.plan.semesters[si].courses.len();
        let course = Course {
            id: new_id(),
            name: params.name.clone(),
            credits: params.credits,
            days_of_week: params.days_of_week.clone(),
            start_time: params.start_time.clone(),
            end_time: params.end_time.clone(),
            grade: params.grade,
            color: Some(self.config.color_for(sibling_count)),
            notes: params.notes.clone(),
        };
        validate_course("", &course)?;

        let mut next = self.plan.clone();
        next.semesters[si].courses.push(course.clone());
        self.commit(ActionKind::AddCourse, next);

        debug!("added course {} to semester {semester_id}", course.id);
        Ok(course)
    }

    pub fn remove_course(&mut self, semester_id: &str, course_id: &str) -> Result<Course> {
        let (si, ci) = self.course_index_or_err(semester_id, course_id)?;

        let mut next = self.plan.clone();
        let removed = next.semesters[si].courses.remove(ci);
        self.commit(ActionKind::RemoveCourse, next);

        debug!("removed course {course_id} from semester {semester_id}");
        Ok(removed)
    }

    /// Merges `params` into a course and revalidates the merged result.
    pub fn update_course(
        &mut self,
        semester_id: &str,
        course_id: &str,
        params: &UpdateCourse,
    ) -> Result<Course> {
        let (si, ci) = self.course_index_or_err(semester_id, course_id)?;

        let mut next = self.plan.clone();
        let course = &mut next.semesters[si].courses[ci];
        if let Some(name) = &params.name {
            course.name = name.clone();
        }
        if let Some(credits) = params.credits {
            course.credits = credits;
        }
        if let Some(days) = &params.days_of_week {
            course.days_of_week = days.clone();
        }
        if let Some(start) = &params.start_time {
            course.start_time = start.clone();
        }
        if let Some(end) = &params.end_time {
            course.end_time = end.clone();
        }
        if let Some(grade) = params.grade {
            course.grade = grade;
        }
        if let Some(notes) = &params.notes {
            course.notes = notes.clone();
        }
        validate_course("", course)?;

        let updated = course.clone();
        self.commit(ActionKind::UpdateCourse, next);
        Ok(updated)
    }

    /// Moves a course within its semester's course list.
    pub fn reorder_courses(&mut self, semester_id: &str, reorder: Reorder) -> Result<()> {
        let si = self
            .plan
            .semester_index(semester_id)
            .ok_or_else(|| PlannerError::SemesterNotFound {
                id: semester_id.to_string(),
            })?;

        let mut next = self.plan.clone();
        if apply_reorder(&mut next.semesters[si].courses, reorder)? {
            self.commit(ActionKind::ReorderCourses, next);
        }
        Ok(())
    }
}
