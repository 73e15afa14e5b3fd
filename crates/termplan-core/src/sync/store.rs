//! The seam between the reconciler and whatever backend holds the remote
//! copy of a user's plan.

use std::{future::Future, sync::Arc};

use super::rows::{Collection, CourseRow, ProfileRow, SemesterRow};
use crate::error::Result;

/// Asynchronous access to the three remote collections.
///
/// Implementations scope every fetch to rows owned by the given user id and
/// treat upserts as insert-or-replace keyed by primary key. An upsert whose
/// id is already owned by another user fails with `PlannerError::Remote`
/// and leaves that row alone. Deleting a semester deletes its courses.
pub trait RemoteStore: Send + Sync {
    fn fetch_profile(&self, user_id: &str) -> impl Future<Output = Result<Option<ProfileRow>>> + Send;

    fn fetch_semesters(&self, user_id: &str) -> impl Future<Output = Result<Vec<SemesterRow>>> + Send;

    fn fetch_courses(&self, user_id: &str) -> impl Future<Output = Result<Vec<CourseRow>>> + Send;

    /// Primary keys of every row the user owns in `collection`.
    fn fetch_ids(
        &self,
        collection: Collection,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    fn delete_rows(
        &self,
        collection: Collection,
        ids: &[String],
    ) -> impl Future<Output = Result<()>> + Send;

    fn upsert_profile(&self, row: &ProfileRow) -> impl Future<Output = Result<()>> + Send;

    fn upsert_semesters(&self, rows: &[SemesterRow]) -> impl Future<Output = Result<()>> + Send;

    fn upsert_courses(&self, rows: &[CourseRow]) -> impl Future<Output = Result<()>> + Send;
}

/// Lets several reconcilers, one per user, share a single store.
impl<S: RemoteStore> RemoteStore for Arc<S> {
    fn fetch_profile(&self, user_id: &str) -> impl Future<Output = Result<Option<ProfileRow>>> + Send {
        (**self).fetch_profile(user_id)
    }

    fn fetch_semesters(&self, user_id: &str) -> impl Future<Output = Result<Vec<SemesterRow>>> + Send {
        (**self).fetch_semesters(user_id)
    }

    fn fetch_courses(&self, user_id: &str) -> impl Future<Output = Result<Vec<CourseRow>>> + Send {
        (**self).fetch_courses(user_id)
    }

    fn fetch_ids(
        &self,
        collection: Collection,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send {
        (**self).fetch_ids(collection, user_id)
    }

    fn delete_rows(
        &self,
        collection: Collection,
        ids: &[String],
    ) -> impl Future<Output = Result<()>> + Send {
        (**self).delete_rows(collection, ids)
    }

    fn upsert_profile(&self, row: &ProfileRow) -> impl Future<Output = Result<()>> + Send {
        (**self).upsert_profile(row)
    }

    fn upsert_semesters(&self, rows: &[SemesterRow]) -> impl Future<Output = Result<()>> + Send {
        (**self).upsert_semesters(rows)
    }

    fn upsert_courses(&self, rows: &[CourseRow]) -> impl Future<Output = Result<()>> + Send {
        (**self).upsert_courses(rows)
    }
}
