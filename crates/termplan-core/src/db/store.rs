//! [`RemoteStore`] backed by a SQLite file.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Database;
use crate::{
    error::{PlannerError, Result},
    sync::{Collection, CourseRow, ProfileRow, RemoteStore, SemesterRow},
};

/// SQLite-backed remote store. Every call opens its own connection on the
/// blocking thread pool, so the store itself is just a path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and its parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the parent directory cannot be
    /// created
    /// Returns `PlannerError::Database` if schema initialization fails
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = path.into();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Database::new(&db_path)?;
        Ok(Self { db_path })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("termplan")
            .place_data_file("remote.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    async fn with_db<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            work(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

impl RemoteStore for SqliteStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRow>> {
        let user_id = user_id.to_string();
        self.with_db(move |db| db.get_profile(&user_id)).await
    }

    async fn fetch_semesters(&self, user_id: &str) -> Result<Vec<SemesterRow>> {
        let user_id = user_id.to_string();
        self.with_db(move |db| db.list_semesters(&user_id)).await
    }

    async fn fetch_courses(&self, user_id: &str) -> Result<Vec<CourseRow>> {
        let user_id = user_id.to_string();
        self.with_db(move |db| db.list_courses(&user_id)).await
    }

    async fn fetch_ids(&self, collection: Collection, user_id: &str) -> Result<Vec<String>> {
        let user_id = user_id.to_string();
        self.with_db(move |db| match collection {
            Collection::Profiles => db.profile_ids(&user_id),
            Collection::Semesters => db.semester_ids(&user_id),
            Collection::Courses => db.course_ids(&user_id),
        })
        .await
    }

    async fn delete_rows(&self, collection: Collection, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let ids = ids.to_vec();
        self.with_db(move |db| match collection {
            Collection::Profiles => db.delete_profiles(&ids),
            Collection::Semesters => db.delete_semesters(&ids),
            Collection::Courses => db.delete_courses(&ids),
        })
        .await
    }

    async fn upsert_profile(&self, row: &ProfileRow) -> Result<()> {
        let row = row.clone();
        self.with_db(move |db| db.upsert_profile(&row)).await
    }

    async fn upsert_semesters(&self, rows: &[SemesterRow]) -> Result<()> {
        let rows = rows.to_vec();
        self.with_db(move |db| db.upsert_semesters(&rows)).await
    }

    async fn upsert_courses(&self, rows: &[CourseRow]) -> Result<()> {
        let rows = rows.to_vec();
        self.with_db(move |db| db.upsert_courses(&rows)).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn semester(id: &str, user: &str, position: i64) -> SemesterRow {
        SemesterRow {
            id: id.into(),
            user_id: user.into(),
            name: format!("Semester {id}"),
            year: 2025,
            season: "Spring".into(),
            is_active: false,
            notes: None,
            position,
        }
    }

    fn course(id: &str, semester_id: &str, position: i64) -> CourseRow {
        CourseRow {
            id: id.into(),
            user_id: "u1".into(),
            semester_id: semester_id.into(),
            name: format!("Course {id}"),
            credits: 3,
            days_of_week: Some(vec!["Monday".into(), "Wednesday".into()]),
            start_time: Some("09:00".into()),
            end_time: Some("10:15".into()),
            grade: Some(3.5),
            color: Some("#3b82f6".into()),
            notes: None,
            position,
        }
    }

    #[tokio::test]
    async fn test_upsert_and_fetch_scoped_by_user() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("nested/remote.db")).unwrap();

        store
            .upsert_semesters(&[semester("b", "u1", 1), semester("a", "u1", 0), semester("x", "u2", 0)])
            .await
            .unwrap();
        store.upsert_courses(&[course("c1", "a", 0)]).await.unwrap();

        let semesters = store.fetch_semesters("u1").await.unwrap();
        let ids: Vec<_> = semesters.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);

        let courses = store.fetch_courses("u1").await.unwrap();
        assert_eq!(courses, vec![course("c1", "a", 0)]);
        assert!(store.fetch_courses("u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_row() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("remote.db")).unwrap();

        store.upsert_semesters(&[semester("a", "u1", 0)]).await.unwrap();
        let mut renamed = semester("a", "u1", 0);
        renamed.name = "Renamed".into();
        store.upsert_semesters(&[renamed]).await.unwrap();

        let semesters = store.fetch_semesters("u1").await.unwrap();
        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_semester_delete_blocked_by_courses() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("remote.db")).unwrap();

        store.upsert_semesters(&[semester("a", "u1", 0)]).await.unwrap();
        store.upsert_courses(&[course("c1", "a", 0)]).await.unwrap();

        let ids = vec!["a".to_string()];
        let err = store
            .delete_rows(Collection::Semesters, &ids)
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::Database { .. }));

        store
            .delete_rows(Collection::Courses, &["c1".to_string()])
            .await
            .unwrap();
        store.delete_rows(Collection::Semesters, &ids).await.unwrap();
        assert!(store.fetch_ids(Collection::Semesters, "u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("remote.db")).unwrap();
        assert_eq!(store.fetch_profile("u1").await.unwrap(), None);

        let profile = ProfileRow {
            user_id: "u1".into(),
            notes: Some("remember electives".into()),
            degree_name: Some("BSc".into()),
            degree_total_credits: Some(120),
        };
        store.upsert_profile(&profile).await.unwrap();
        assert_eq!(store.fetch_profile("u1").await.unwrap(), Some(profile));
    }
}
