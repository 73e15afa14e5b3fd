//! Export and import for the Planner.

use jiff::Timestamp;
use log::{info, warn};

use super::Planner;
use crate::{
    display::OperationStatus,
    error::Result,
    history::ActionKind,
    models::NoteScope,
    transfer::{ExportEnvelope, ImportSummary},
    validation::import::parse_envelope,
};

impl Planner {
    /// Snapshot of the plan in the portable envelope shape.
    pub fn export_envelope(&self) -> ExportEnvelope {
        ExportEnvelope::from_plan(&self.plan, Timestamp::now())
    }

    /// Serializes the plan as pretty-printed portable JSON.
    pub fn export_data(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.export_envelope())?;
        info!(
            "exported {} semesters ({} bytes)",
            self.plan.semesters.len(),
            json.len()
        );
        Ok(json)
    }

    /// Parses, validates and applies portable JSON.
    ///
    /// Fails closed: on any parse or validation error the plan and history
    /// are untouched. On success the semesters, notes and degree are replaced
    /// wholesale under a single [`ActionKind::Import`] checkpoint, so one
    /// [`Planner::undo`] reverts the whole import. The first imported
    /// semester becomes current.
    pub fn try_import(&mut self, raw: &str) -> Result<ImportSummary> {
        let content = parse_envelope(raw)?.into_content()?;

        let summary = ImportSummary {
            semesters: content.semesters.len(),
            courses: content.semesters.iter().map(|s| s.courses.len()).sum(),
        };

        let mut next = self.plan.clone();
        next.current_semester_id = content.semesters.first().map(|s| s.id.clone());
        next.semesters = content.semesters;
        next.notes = content.notes;
        next.degree = content.degree;
        if let NoteScope::Semester(id) = &next.note_scope {
            if next.semester(id).is_none() {
                next.note_scope = NoteScope::General;
            }
        }
        self.commit(ActionKind::Import, next);

        info!(
            "imported {} semesters and {} courses (format version {})",
            summary.semesters,
            summary.courses,
            content.version.as_deref().unwrap_or("unknown")
        );
        Ok(summary)
    }

    /// UI-facing import: never fails, reports the outcome as a status with a
    /// human-readable message.
    pub fn import_data(&mut self, raw: &str) -> OperationStatus {
        match self.try_import(raw) {
            Ok(summary) => OperationStatus::success(format!(
                "Imported {} semesters and {} courses",
                summary.semesters, summary.courses
            )),
            Err(e) => {
                warn!("import rejected: {e}");
                OperationStatus::failure(e.to_string())
            }
        }
    }
}
