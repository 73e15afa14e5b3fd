//! Pull and push of a whole plan against a [`RemoteStore`].

use std::{
    collections::BTreeSet,
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use log::{debug, info, warn};
use serde::Serialize;

use super::{
    rows::{Collection, RemoteRows},
    store::RemoteStore,
};
use crate::{
    error::{PlannerError, Result, SyncStage},
    models::Plan,
};

/// Upper bound on a single pull or push unless configured otherwise.
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(30);

/// What a push changed remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PushReport {
    pub deleted_courses: Vec<String>,
    pub deleted_semesters: Vec<String>,
    pub upserted_semesters: usize,
    pub upserted_courses: usize,
}

/// Marks a sync as running for as long as it is alive.
struct SyncGuard<'a>(&'a AtomicBool);

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Wraps a store failure with the stage it happened in. Errors that already
/// describe a sync failure pass through untouched.
fn at_stage(stage: SyncStage) -> impl Fn(PlannerError) -> PlannerError {
    move |err| match err {
        err @ (PlannerError::Sync { .. }
        | PlannerError::SyncInProgress
        | PlannerError::SyncTimeout { .. }) => err,
        other => PlannerError::sync(stage, other),
    }
}

/// Reconciles one user's local plan with a remote store.
///
/// At most one pull or push runs at a time per reconciler; a second call
/// while one is in flight fails with [`PlannerError::SyncInProgress`]
/// instead of queueing.
#[derive(Debug)]
pub struct SyncReconciler<S> {
    store: S,
    user_id: String,
    timeout: Duration,
    syncing: AtomicBool,
}

impl<S: RemoteStore> SyncReconciler<S> {
    pub fn builder(store: S) -> SyncReconcilerBuilder<S> {
        SyncReconcilerBuilder::new(store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True while a pull or push is in flight.
    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<SyncGuard<'_>> {
        self.syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PlannerError::SyncInProgress)?;
        Ok(SyncGuard(&self.syncing))
    }

    async fn bounded<T>(&self, work: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.timeout, work)
            .await
            .map_err(|_| PlannerError::SyncTimeout {
                secs: self.timeout.as_secs(),
            })?
    }

    /// Fetches the user's profile, semesters and courses and assembles them
    /// into a validated plan. The caller decides what to do with it; nothing
    /// local is touched here.
    pub async fn pull(&self) -> Result<Plan> {
        let _guard = self.begin()?;
        debug!("pulling plan for user {}", self.user_id);

        let plan = self.bounded(self.pull_rows()).await?;
        info!(
            "pulled {} semesters and {} courses",
            plan.semesters.len(),
            plan.courses().count()
        );
        Ok(plan)
    }

    async fn pull_rows(&self) -> Result<Plan> {
        let stage = at_stage(SyncStage::Pull);
        let (profile, semesters, courses) = tokio::try_join!(
            async { self.store.fetch_profile(&self.user_id).await.map_err(&stage) },
            async { self.store.fetch_semesters(&self.user_id).await.map_err(&stage) },
            async { self.store.fetch_courses(&self.user_id).await.map_err(&stage) },
        )?;
        RemoteRows {
            profile,
            semesters,
            courses,
        }
        .into_plan()
    }

    /// Makes the remote copy match `plan`.
    ///
    /// Rows the user owns remotely but that no longer exist locally are
    /// deleted first, courses before semesters, then the profile, semesters
    /// and courses are upserted. A failure stops the push where it happened;
    /// earlier steps are not rolled back.
    pub async fn push(&self, plan: &Plan) -> Result<PushReport> {
        let _guard = self.begin()?;
        debug!("pushing plan for user {}", self.user_id);

        let report = self.bounded(self.push_rows(plan)).await?;
        info!(
            "pushed {} semesters and {} courses, deleted {} semesters and {} courses",
            report.upserted_semesters,
            report.upserted_courses,
            report.deleted_semesters.len(),
            report.deleted_courses.len()
        );
        Ok(report)
    }

    async fn push_rows(&self, plan: &Plan) -> Result<PushReport> {
        let rows = RemoteRows::from_plan(plan, &self.user_id);
        let mut report = PushReport::default();

        let delete = at_stage(SyncStage::Delete);
        report.deleted_courses = self
            .stale_ids(Collection::Courses, &plan.course_ids())
            .await
            .map_err(&delete)?;
        report.deleted_semesters = self
            .stale_ids(Collection::Semesters, &plan.semester_ids())
            .await
            .map_err(&delete)?;

        for (collection, ids) in [
            (Collection::Courses, &report.deleted_courses),
            (Collection::Semesters, &report.deleted_semesters),
        ] {
            if ids.is_empty() {
                continue;
            }
            debug!("deleting {} stale {}", ids.len(), collection.as_str());
            self.store
                .delete_rows(collection, ids)
                .await
                .map_err(&delete)?;
        }

        let upsert = at_stage(SyncStage::Upsert);
        if let Some(profile) = &rows.profile {
            self.store.upsert_profile(profile).await.map_err(&upsert)?;
        }
        if !rows.semesters.is_empty() {
            self.store
                .upsert_semesters(&rows.semesters)
                .await
                .map_err(&upsert)?;
        }
        if !rows.courses.is_empty() {
            self.store
                .upsert_courses(&rows.courses)
                .await
                .map_err(&upsert)?;
        }
        report.upserted_semesters = rows.semesters.len();
        report.upserted_courses = rows.courses.len();

        Ok(report)
    }

    /// Remote ids in `collection` with no local counterpart.
    async fn stale_ids(&self, collection: Collection, local: &BTreeSet<&str>) -> Result<Vec<String>> {
        let remote = self.store.fetch_ids(collection, &self.user_id).await?;
        let stale: Vec<String> = remote
            .into_iter()
            .filter(|id| !local.contains(id.as_str()))
            .collect();
        if !stale.is_empty() {
            warn!(
                "{} {} exist remotely but not locally",
                stale.len(),
                collection.as_str()
            );
        }
        Ok(stale)
    }
}

/// Builder for [`SyncReconciler`].
#[derive(Debug)]
pub struct SyncReconcilerBuilder<S> {
    store: S,
    user_id: Option<String>,
    timeout: Duration,
}

impl<S: RemoteStore> SyncReconcilerBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            user_id: None,
            timeout: DEFAULT_SYNC_TIMEOUT,
        }
    }

    /// Owner id every remote row is scoped to.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if no user id was given or the
    /// timeout is zero
    pub fn build(self) -> Result<SyncReconciler<S>> {
        let user_id = match self.user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                return Err(PlannerError::Configuration {
                    message: "sync requires a non-empty user id".to_string(),
                })
            }
        };
        if self.timeout.is_zero() {
            return Err(PlannerError::Configuration {
                message: "sync timeout must be greater than zero".to_string(),
            });
        }
        Ok(SyncReconciler {
            store: self.store,
            user_id,
            timeout: self.timeout,
            syncing: AtomicBool::new(false),
        })
    }
}
