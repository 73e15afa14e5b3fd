//! In-process [`RemoteStore`] used for offline sessions and tests.
//!
//! Rows live behind a tokio mutex. Calls can be slowed down with a fixed
//! latency and individual operations can be made to fail, which is how
//! timeouts and partial pushes are exercised. The tables behave like the
//! SQLite schema: deleting a semester deletes its courses, a course cannot
//! point at a missing semester, and a row id owned by one user cannot be
//! overwritten by another.

use std::{collections::HashSet, time::Duration};

use tokio::sync::Mutex;

use super::{
    rows::{Collection, CourseRow, ProfileRow, RemoteRows, SemesterRow},
    store::RemoteStore,
};
use crate::error::{PlannerError, Result};

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    FetchProfile,
    FetchSemesters,
    FetchCourses,
    FetchIds,
    Delete,
    UpsertProfile,
    UpsertSemesters,
    UpsertCourses,
}

#[derive(Debug, Default)]
struct Tables {
    profiles: Vec<ProfileRow>,
    semesters: Vec<SemesterRow>,
    courses: Vec<CourseRow>,
    failing: HashSet<StoreOp>,
    calls: Vec<String>,
}

/// Inserts or replaces rows by id. All rows are checked before any is
/// written, so a batch touching another user's id changes nothing.
fn upsert_by<T: Clone>(
    table: &mut Vec<T>,
    rows: &[T],
    kind: &str,
    key: impl Fn(&T) -> &str,
    owner: impl Fn(&T) -> &str,
) -> Result<()> {
    if let Some(taken) = rows.iter().find(|&row| {
        table
            .iter()
            .any(|existing| key(existing) == key(row) && owner(existing) != owner(row))
    }) {
        return Err(PlannerError::Remote {
            message: format!("{kind} {} belongs to another user", key(taken)),
        });
    }
    for row in rows {
        match table.iter().position(|existing| key(existing) == key(row)) {
            Some(i) => table[i] = row.clone(),
            None => table.push(row.clone()),
        }
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every call by `latency` before it touches the tables.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Replaces the stored rows wholesale.
    pub async fn seed(&self, rows: RemoteRows) {
        let mut tables = self.tables.lock().await;
        tables.profiles = rows.profile.into_iter().collect();
        tables.semesters = rows.semesters;
        tables.courses = rows.courses;
    }

    /// Rows currently owned by `user_id`, in storage order.
    pub async fn snapshot(&self, user_id: &str) -> RemoteRows {
        let tables = self.tables.lock().await;
        RemoteRows {
            profile: tables
                .profiles
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned(),
            semesters: tables
                .semesters
                .iter()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect(),
            courses: tables
                .courses
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect(),
        }
    }

    /// Makes every later call of `op` fail.
    pub async fn fail_on(&self, op: StoreOp) {
        self.tables.lock().await.failing.insert(op);
    }

    pub async fn clear_failures(&self) {
        self.tables.lock().await.failing.clear();
    }

    /// Log of the calls that reached the tables, e.g. `delete courses`.
    pub async fn calls(&self) -> Vec<String> {
        self.tables.lock().await.calls.clone()
    }

    async fn enter(&self, op: StoreOp, call: String) -> Result<tokio::sync::MutexGuard<'_, Tables>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let mut tables = self.tables.lock().await;
        if tables.failing.contains(&op) {
            return Err(PlannerError::Remote {
                message: format!("{call} failed"),
            });
        }
        tables.calls.push(call);
        Ok(tables)
    }
}

impl RemoteStore for MemoryStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRow>> {
        let tables = self
            .enter(StoreOp::FetchProfile, "fetch profiles".to_string())
            .await?;
        Ok(tables
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn fetch_semesters(&self, user_id: &str) -> Result<Vec<SemesterRow>> {
        let tables = self
            .enter(StoreOp::FetchSemesters, "fetch semesters".to_string())
            .await?;
        Ok(tables
            .semesters
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_courses(&self, user_id: &str) -> Result<Vec<CourseRow>> {
        let tables = self
            .enter(StoreOp::FetchCourses, "fetch courses".to_string())
            .await?;
        Ok(tables
            .courses
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_ids(&self, collection: Collection, user_id: &str) -> Result<Vec<String>> {
        let tables = self
            .enter(StoreOp::FetchIds, format!("fetch {} ids", collection.as_str()))
            .await?;
        let ids = match collection {
            Collection::Profiles => tables
                .profiles
                .iter()
                .filter(|p| p.user_id == user_id)
                .map(|p| p.user_id.clone())
                .collect(),
            Collection::Semesters => tables
                .semesters
                .iter()
                .filter(|s| s.user_id == user_id)
                .map(|s| s.id.clone())
                .collect(),
            Collection::Courses => tables
                .courses
                .iter()
                .filter(|c| c.user_id == user_id)
                .map(|c| c.id.clone())
                .collect(),
        };
        Ok(ids)
    }

    async fn delete_rows(&self, collection: Collection, ids: &[String]) -> Result<()> {
        let mut tables = self
            .enter(StoreOp::Delete, format!("delete {}", collection.as_str()))
            .await?;
        let doomed: HashSet<&str> = ids.iter().map(String::as_str).collect();
        match collection {
            Collection::Profiles => tables
                .profiles
                .retain(|p| !doomed.contains(p.user_id.as_str())),
            Collection::Semesters => {
                tables
                    .courses
                    .retain(|c| !doomed.contains(c.semester_id.as_str()));
                tables.semesters.retain(|s| !doomed.contains(s.id.as_str()));
            }
            Collection::Courses => tables.courses.retain(|c| !doomed.contains(c.id.as_str())),
        }
        Ok(())
    }

    async fn upsert_profile(&self, row: &ProfileRow) -> Result<()> {
        let mut tables = self
            .enter(StoreOp::UpsertProfile, "upsert profiles".to_string())
            .await?;
        upsert_by(
            &mut tables.profiles,
            std::slice::from_ref(row),
            "profile",
            |p| p.user_id.as_str(),
            |p| p.user_id.as_str(),
        )
    }

    async fn upsert_semesters(&self, rows: &[SemesterRow]) -> Result<()> {
        let mut tables = self
            .enter(StoreOp::UpsertSemesters, "upsert semesters".to_string())
            .await?;
        upsert_by(
            &mut tables.semesters,
            rows,
            "semester",
            |s| s.id.as_str(),
            |s| s.user_id.as_str(),
        )
    }

    async fn upsert_courses(&self, rows: &[CourseRow]) -> Result<()> {
        let mut tables = self
            .enter(StoreOp::UpsertCourses, "upsert courses".to_string())
            .await?;
        if let Some(orphan) = rows
            .iter()
            .find(|c| !tables.semesters.iter().any(|s| s.id == c.semester_id))
        {
            return Err(PlannerError::Remote {
                message: format!(
                    "course {} references missing semester {}",
                    orphan.id, orphan.semester_id
                ),
            });
        }
        upsert_by(
            &mut tables.courses,
            rows,
            "course",
            |c| c.id.as_str(),
            |c| c.user_id.as_str(),
        )
    }
}
