//! Reconciliation of the local plan with a per-user remote copy.
//!
//! The remote side is three collections (profiles, semesters and courses)
//! reached through the [`RemoteStore`] trait. [`SyncReconciler`] pulls them
//! into a [`Plan`](crate::models::Plan) or pushes a plan into them with
//! set-difference deletes followed by upserts.
//!
//! Two stores ship with the crate: [`MemoryStore`] keeps rows in process and
//! [`SqliteStore`](crate::db::SqliteStore) keeps them in a SQLite file.

pub mod memory;
pub mod reconciler;
pub mod rows;
pub mod store;

pub use memory::{MemoryStore, StoreOp};
pub use reconciler::{PushReport, SyncReconciler, SyncReconcilerBuilder, DEFAULT_SYNC_TIMEOUT};
pub use rows::{Collection, CourseRow, ProfileRow, RemoteRows, SemesterRow};
pub use store::RemoteStore;
