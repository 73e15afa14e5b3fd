//! Semester operations for the Planner.

use log::debug;

use super::{apply_reorder, new_id, Planner};
use crate::{
    error::{PlannerError, Result},
    history::ActionKind,
    models::{NoteScope, Plan, Semester},
    params::{CreateSemester, Reorder, UpdateSemester},
    validation::validate_semester_fields,
};

/// Sets `is_active` on the semester at `index` and clears it everywhere else.
fn make_exclusively_active(plan: &mut Plan, index: usize) {
    for (i, semester) in plan.semesters.iter_mut().enumerate() {
        semester.is_active = Some(i == index);
    }
}

impl Planner {
    fn semester_index_or_err(&self, id: &str) -> Result<usize> {
        self.plan
            .semester_index(id)
            .ok_or_else(|| PlannerError::SemesterNotFound { id: id.to_string() })
    }

    /// Appends a new, empty semester and makes it the current one.
    pub fn add_semester(&mut self, params: &CreateSemester) -> Result<Semester> {
        let semester = Semester {
            id: new_id(),
            name: params.name.clone(),
            year: params.year,
            season: params.season,
            notes: params.notes.clone(),
            is_active: None,
            courses: Vec::new(),
        };
        validate_semester_fields("", &semester)?;

        let mut next = self.plan.clone();
        next.semesters.push(semester.clone());
        next.current_semester_id = Some(semester.id.clone());
        self.commit(ActionKind::AddSemester, next);

        debug!("added semester {} ({} {})", semester.id, semester.season, semester.year);
        Ok(semester)
    }

    /// Removes a semester with all its courses. If it was current, nothing
    /// is current afterwards.
    pub fn remove_semester(&mut self, id: &str) -> Result<Semester> {
        let index = self.semester_index_or_err(id)?;

        let mut next = self.plan.clone();
        let removed = next.semesters.remove(index);
        if next.current_semester_id.as_deref() == Some(id) {
            next.current_semester_id = None;
        }
        if next.note_scope == NoteScope::Semester(id.to_string()) {
            next.note_scope = NoteScope::General;
        }
        self.commit(ActionKind::RemoveSemester, next);

        debug!("removed semester {id} with {} courses", removed.courses.len());
        Ok(removed)
    }

    /// Merges `params` into a semester and revalidates the merged result.
    /// Setting `is_active` to `true` clears it on every other semester in the
    /// same update.
    pub fn update_semester(&mut self, id: &str, params: &UpdateSemester) -> Result<Semester> {
        let index = self.semester_index_or_err(id)?;

        let mut next = self.plan.clone();
        let semester = &mut next.semesters[index];
        if let Some(name) = &params.name {
            semester.name = name.clone();
        }
        if let Some(year) = params.year {
            semester.year = year;
        }
        if let Some(season) = params.season {
            semester.season = season;
        }
        if let Some(notes) = &params.notes {
            semester.notes = notes.clone();
        }
        if let Some(active) = params.is_active {
            semester.is_active = Some(active);
        }
        validate_semester_fields("", semester)?;

        if params.is_active == Some(true) {
            make_exclusively_active(&mut next, index);
        }
        let updated = next.semesters[index].clone();
        self.commit(ActionKind::UpdateSemester, next);
        Ok(updated)
    }

    /// Moves the semester at `from` to position `to`.
    pub fn reorder_semesters(&mut self, reorder: Reorder) -> Result<()> {
        let mut next = self.plan.clone();
        if apply_reorder(&mut next.semesters, reorder)? {
            self.commit(ActionKind::ReorderSemesters, next);
        }
        Ok(())
    }

    /// Marks one semester active and every other inactive, as one atomic
    /// update with a single checkpoint.
    pub fn set_active_semester(&mut self, id: &str) -> Result<()> {
        let index = self.semester_index_or_err(id)?;

        let mut next = self.plan.clone();
        make_exclusively_active(&mut next, index);
        self.commit(ActionKind::SetActiveSemester, next);

        debug!("semester {id} is now active");
        Ok(())
    }

    /// Changes which semester the UI treats as current. This is navigation,
    /// not a plan mutation, so no checkpoint is recorded.
    pub fn select_semester(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            self.semester_index_or_err(id)?;
        }
        self.plan.current_semester_id = id.map(String::from);
        Ok(())
    }

    pub fn current_semester(&self) -> Option<&Semester> {
        self.plan.current_semester()
    }
}
