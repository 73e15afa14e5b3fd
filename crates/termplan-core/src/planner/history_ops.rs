//! Undo and redo for the Planner.

use log::debug;

use super::Planner;
use crate::history::{ActionHistory, ActionKind};

impl Planner {
    /// Restores the plan as it was before the most recent checkpoint.
    /// Returns the kind of mutation that was undone, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<ActionKind> {
        let (kind, snapshot) = self.history.undo()?;
        self.plan = snapshot.clone();
        debug!("undo '{kind}', cursor now {:?}", self.history.cursor());
        Some(kind)
    }

    /// Re-applies the checkpoint after the cursor. Returns the kind of
    /// mutation that was redone, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<ActionKind> {
        let (kind, snapshot) = self.history.redo()?;
        self.plan = snapshot.clone();
        debug!("redo '{kind}', cursor now {:?}", self.history.cursor());
        Some(kind)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
