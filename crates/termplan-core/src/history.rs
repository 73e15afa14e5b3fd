//! Linear undo/redo history built from whole-plan snapshots.
//!
//! Every checkpoint stores deep copies of the plan before and after one
//! logical mutation. Undo and redo restore those copies wholesale instead of
//! replaying inverse operations, so forward and backward logic cannot drift.
//!
//! The history is a bounded sequence with a single cursor:
//!
//! ```text
//!  entries:  [e0] [e1] [e2] [e3]
//!                       ^cursor
//!  undo  -> restore e2.before, cursor -> e1
//!  redo  -> restore e3.after,  cursor -> e3
//!  record-> drop e3, append e4, cursor -> e4
//! ```
//!
//! A cursor of `None` means every entry has been undone (or there are none).

use std::{collections::VecDeque, fmt};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::Plan,
};

/// Default number of checkpoints kept before the oldest are dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Tag describing which mutation produced a checkpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    AddSemester,
    RemoveSemester,
    UpdateSemester,
    ReorderSemesters,
    SetActiveSemester,
    AddCourse,
    RemoveCourse,
    UpdateCourse,
    ReorderCourses,
    SetDegree,
    SetNotes,
    SetNoteScope,
    Import,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::AddSemester => "add semester",
            ActionKind::RemoveSemester => "remove semester",
            ActionKind::UpdateSemester => "update semester",
            ActionKind::ReorderSemesters => "reorder semesters",
            ActionKind::SetActiveSemester => "set active semester",
            ActionKind::AddCourse => "add course",
            ActionKind::RemoveCourse => "remove course",
            ActionKind::UpdateCourse => "update course",
            ActionKind::ReorderCourses => "reorder courses",
            ActionKind::SetDegree => "set degree",
            ActionKind::SetNotes => "set notes",
            ActionKind::SetNoteScope => "set note scope",
            ActionKind::Import => "import",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub kind: ActionKind,
    pub before: Plan,
    pub after: Plan,
    pub timestamp: Timestamp,
}

/// Bounded linear history with a single cursor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionHistory {
    entries: VecDeque<HistoryEntry>,
    cursor: Option<usize>,
    limit: usize,
}

impl ActionHistory {
    /// Creates an empty history keeping at most `limit` checkpoints.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Records a checkpoint. Entries after the cursor are discarded first,
    /// then the oldest entries are dropped until the limit holds.
    pub fn record(&mut self, kind: ActionKind, before: Plan, after: Plan) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push_back(HistoryEntry {
            kind,
            before,
            after,
            timestamp: Timestamp::now(),
        });
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one checkpoint and returns the plan to restore, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<(ActionKind, &Plan)> {
        let current = self.cursor?;
        let entry = self.entries.get(current)?;
        self.cursor = current.checked_sub(1);
        Some((entry.kind, &entry.before))
    }

    /// Steps forward one checkpoint and returns the plan to restore, or
    /// `None` when the cursor is already at the newest entry.
    pub fn redo(&mut self) -> Option<(ActionKind, &Plan)> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return None;
        }
        let entry = self.entries.get(next)?;
        self.cursor = Some(next);
        Some((entry.kind, &entry.after))
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    /// Index of the most recently applied checkpoint.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Checks the invariants a deserialized history may break: the cursor
    /// must point at an entry and the entries must fit the limit.
    pub fn check(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(PlannerError::Configuration {
                message: "history limit must be at least 1".to_string(),
            });
        }
        if self.entries.len() > self.limit {
            return Err(PlannerError::Configuration {
                message: format!(
                    "history holds {} entries but keeps at most {}",
                    self.entries.len(),
                    self.limit
                ),
            });
        }
        if let Some(cursor) = self.cursor {
            if cursor >= self.entries.len() {
                return Err(PlannerError::Configuration {
                    message: format!(
                        "history cursor {cursor} is past its {} entries",
                        self.entries.len()
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
