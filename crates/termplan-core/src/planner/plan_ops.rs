//! Plan-level operations: degree, notes and note scope.

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    history::ActionKind,
    models::{Degree, NoteScope},
    validation::{validate_degree, validate_notes},
};

impl Planner {
    /// Sets or clears the degree the plan works towards.
    pub fn set_degree(&mut self, degree: Option<Degree>) -> Result<()> {
        if let Some(degree) = &degree {
            validate_degree("degree", degree)?;
        }
        let mut next = self.plan.clone();
        next.degree = degree;
        self.commit(ActionKind::SetDegree, next);
        Ok(())
    }

    /// Replaces the plan-wide notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        let notes = notes.into();
        validate_notes("notes", &notes)?;
        let mut next = self.plan.clone();
        next.notes = notes;
        self.commit(ActionKind::SetNotes, next);
        Ok(())
    }

    /// Switches which notes the UI shows. A semester scope must name an
    /// existing semester.
    pub fn set_note_scope(&mut self, scope: NoteScope) -> Result<()> {
        if let NoteScope::Semester(id) = &scope {
            if self.plan.semester(id).is_none() {
                return Err(PlannerError::SemesterNotFound { id: id.clone() });
            }
        }
        let mut next = self.plan.clone();
        next.note_scope = scope;
        self.commit(ActionKind::SetNoteScope, next);
        Ok(())
    }
}
