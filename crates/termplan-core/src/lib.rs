//! Core library for the Termplan academic planner.
//!
//! This crate owns the state of a multi-semester academic plan: semesters,
//! the courses inside them, an optional degree target and free-form notes.
//! It provides validated mutation primitives with undo/redo, GPA and
//! schedule-conflict calculations, a portable JSON export format and
//! reconciliation with a per-user remote store.
//!
//! # Layout
//!
//! - **Domain Models** ([`models`]): plain serializable data, implementing
//!   [`std::fmt::Display`] as markdown
//! - **Engine** ([`planner`]): the single owner of the plan, exposing every
//!   mutation and query
//! - **Pure functions** ([`calc`], [`time`], [`validation`]): usable without
//!   a planner
//! - **Persistence** ([`transfer`], [`sync`], [`db`]): file export/import and
//!   remote sync
//! - **Display Wrappers** ([`display`]): contextual formatting for results
//!   and collections
//!
//! # Quick Start
//!
//! ```rust
//! use termplan_core::{
//!     models::{Season, Weekday},
//!     params::{CreateCourse, CreateSemester},
//!     PlannerBuilder,
//! };
//!
//! # fn example() -> Result<(), termplan_core::PlannerError> {
//! let mut planner = PlannerBuilder::new().build()?;
//!
//! let autumn = planner.add_semester(&CreateSemester {
//!     name: "Year one, autumn".to_string(),
//!     year: 2024,
//!     season: Season::Autumn,
//!     notes: None,
//! })?;
//!
//! planner.add_course(
//!     &autumn.id,
//!     &CreateCourse::new("Linear Algebra", 4).meeting([Weekday::Monday], "09:00", "10:30"),
//! )?;
//! planner.add_course(
//!     &autumn.id,
//!     &CreateCourse::new("Physics I", 4).meeting([Weekday::Monday], "10:00", "11:00"),
//! )?;
//!
//! let conflicts = planner.schedule_conflicts(None)?;
//! assert_eq!(conflicts.len(), 1);
//!
//! let exported = planner.export_data()?;
//! println!("{exported}");
//! # Ok(())
//! # }
//! ```

pub mod calc;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod params;
pub mod planner;
pub mod sync;
pub mod time;
pub mod transfer;
pub mod validation;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use db::SqliteStore;
pub use display::{Conflicts, CreateResult, DeleteResult, History, OperationStatus, Schedule, UpdateResult};
pub use error::{ErrorKind, PlannerError, Result, SyncStage};
pub use history::{ActionHistory, ActionKind};
pub use models::{Course, Degree, NoteScope, Plan, Season, Semester, Weekday};
pub use params::{CreateCourse, CreateSemester, Reorder, UpdateCourse, UpdateSemester};
pub use planner::{Planner, PlannerBuilder};
pub use sync::{MemoryStore, PushReport, RemoteStore, SyncReconciler};
pub use transfer::{ExportEnvelope, ImportSummary};
