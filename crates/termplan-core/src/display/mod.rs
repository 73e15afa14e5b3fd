//! Markdown display for plans, derived facts and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers format collections and operation outcomes:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │ (Semester, ..)  │───▶│ (Conflicts, ..) │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Conflicts, Schedule and History wrappers
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus, the `{ success, message }` boundary result
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use termplan_core::display::OperationStatus;
//!
//! let ok = OperationStatus::success("Imported 2 semesters".to_string());
//! assert!(format!("{ok}").starts_with("Success:"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Conflicts, History, Schedule};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
