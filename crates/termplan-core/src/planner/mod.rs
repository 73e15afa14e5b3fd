//! The planning state engine.
//!
//! [`Planner`] is the single authoritative in-memory owner of a [`Plan`]. The
//! UI holds one instance per session (constructed through
//! [`PlannerBuilder`], dropped on logout) and talks to it through the
//! operations grouped in the submodules:
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ Mutation ops     │    │ Validation       │    │ Action history   │
//! │ (semester_ops,   │───▶│ (crate::         │───▶│ (checkpoint per  │
//! │  course_ops, ..) │    │  validation)     │    │  mutation)       │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances with configuration
//! - [`semester_ops`]: add/remove/update/reorder semesters, active flag
//! - [`course_ops`]: add/remove/update/reorder courses within a semester
//! - [`plan_ops`]: degree, notes and note scope
//! - [`history_ops`]: undo and redo
//! - [`queries`]: GPA, conflicts, schedule and credit summaries
//! - [`transfer_ops`]: portable JSON export and import
//! - [`sync_ops`]: pull from and push to a remote store
//!
//! ## Mutation contract
//!
//! Every mutation primitive is synchronous and all-or-nothing. It clones the
//! plan, applies the change to the copy, validates the copy and only then
//! swaps it in and records a checkpoint. A rejected call leaves the plan and
//! the history exactly as they were.
//!
//! ```rust
//! use termplan_core::{models::Season, params::{CreateCourse, CreateSemester}, PlannerBuilder};
//!
//! # fn example() -> Result<(), termplan_core::PlannerError> {
//! let mut planner = PlannerBuilder::new().build()?;
//! let semester = planner.add_semester(&CreateSemester {
//!     name: "First autumn".to_string(),
//!     year: 2024,
//!     season: Season::Autumn,
//!     notes: None,
//! })?;
//! planner.add_course(&semester.id, &CreateCourse::new("Calculus I", 4).graded(3.7))?;
//! assert!((planner.cumulative_gpa() - 3.7).abs() < 1e-9);
//!
//! planner.undo();
//! assert!(planner.plan().semesters[0].courses.is_empty());
//! # Ok(())
//! # }
//! ```

use log::debug;
use uuid::Uuid;

pub mod builder;
pub mod course_ops;
pub mod history_ops;
pub mod plan_ops;
pub mod queries;
pub mod semester_ops;
pub mod sync_ops;
pub mod transfer_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    history::{ActionHistory, ActionKind},
    models::Plan,
    params::Reorder,
};

/// Engine instance owning the plan and its history.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) plan: Plan,
    pub(crate) history: ActionHistory,
    pub(crate) config: PlannerConfig,
}

impl Planner {
    pub(crate) fn new(plan: Plan, history: ActionHistory, config: PlannerConfig) -> Self {
        Self {
            plan,
            history,
            config,
        }
    }

    /// Read-only view of the current plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Splits the engine into its plan and history, e.g. for persisting a
    /// session.
    pub fn into_parts(self) -> (Plan, ActionHistory) {
        (self.plan, self.history)
    }

    /// Swaps in an already validated candidate plan and records the
    /// checkpoint for it.
    pub(crate) fn commit(&mut self, kind: ActionKind, next: Plan) {
        let before = std::mem::replace(&mut self.plan, next);
        self.history.record(kind, before, self.plan.clone());
        debug!(
            "checkpoint '{kind}' recorded ({} of {})",
            self.history.len(),
            self.history.limit()
        );
    }
}

/// Fresh opaque identifier for a new entity.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Applies move semantics to `items`. Equal indices are a no-op and report
/// `false`.
pub(crate) fn apply_reorder<T>(items: &mut Vec<T>, reorder: Reorder) -> Result<bool> {
    let len = items.len();
    for (field, index) in [("from", reorder.from), ("to", reorder.to)] {
        if index >= len {
            return Err(PlannerError::validation(field)
                .with_reason(format!("index {index} is out of range for {len} items")));
        }
    }
    if reorder.from == reorder.to {
        return Ok(false);
    }
    let item = items.remove(reorder.from);
    items.insert(reorder.to, item);
    Ok(true)
}
