//! Plan aggregate: the root of everything the engine owns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Course, Degree, Semester};

/// Which notes the UI is currently showing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "scope", content = "id", rename_all = "camelCase")]
pub enum NoteScope {
    /// Plan-wide notes
    #[default]
    General,
    /// Notes of one semester
    Semester(String),
}

/// The aggregate of semesters, courses, degree info and notes for one user.
///
/// This is the unit that gets snapshotted by the history, serialized by the
/// portable export and reconciled with the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub semesters: Vec<Semester>,

    #[serde(default)]
    pub degree: Option<Degree>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub note_scope: NoteScope,

    /// Semester the UI treats as selected; not persisted remotely
    #[serde(default)]
    pub current_semester_id: Option<String>,
}

impl Plan {
    pub fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub(crate) fn semester_index(&self, id: &str) -> Option<usize> {
        self.semesters.iter().position(|s| s.id == id)
    }

    /// Finds a course anywhere in the plan together with its semester.
    pub fn course(&self, course_id: &str) -> Option<(&Semester, &Course)> {
        self.semesters
            .iter()
            .find_map(|s| s.find_course(course_id).map(|c| (s, c)))
    }

    /// Iterates over every course of every semester, in plan order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| s.courses.iter())
    }

    pub fn semester_ids(&self) -> BTreeSet<&str> {
        self.semesters.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn course_ids(&self) -> BTreeSet<&str> {
        self.courses().map(|c| c.id.as_str()).collect()
    }

    /// The semester flagged active, if any.
    pub fn active_semester(&self) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.is_active())
    }

    pub fn current_semester(&self) -> Option<&Semester> {
        self.current_semester_id
            .as_deref()
            .and_then(|id| self.semester(id))
    }
}
