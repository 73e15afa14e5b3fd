//! Remote sync operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    error::Result,
    models::NoteScope,
    sync::{PushReport, RemoteStore, SyncReconciler},
};

impl Planner {
    /// Replaces the local plan with the user's remote copy.
    ///
    /// The pulled plan becomes the new baseline: history is cleared, so a
    /// pull cannot be undone. The current semester is the remote active
    /// one, else the first. The note scope survives if its semester still
    /// exists.
    pub async fn sync_from_remote<S: RemoteStore>(&mut self, sync: &SyncReconciler<S>) -> Result<()> {
        let mut pulled = sync.pull().await?;

        pulled.note_scope = match &self.plan.note_scope {
            NoteScope::Semester(id) if pulled.semester(id).is_some() => self.plan.note_scope.clone(),
            _ => NoteScope::General,
        };

        self.plan = pulled;
        self.clear_history();
        info!(
            "local plan replaced by remote copy of user {}",
            sync.user_id()
        );
        Ok(())
    }

    /// Makes the remote copy match the local plan. Local state is not
    /// touched.
    pub async fn sync_to_remote<S: RemoteStore>(&self, sync: &SyncReconciler<S>) -> Result<PushReport> {
        sync.push(&self.plan).await
    }
}
