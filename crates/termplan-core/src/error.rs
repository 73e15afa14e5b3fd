//! Error types for the planning engine.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Stage of a sync operation, used to say where a remote failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    /// Pulling remote rows into the local plan
    Pull,
    /// Deleting remote rows that no longer exist locally
    Delete,
    /// Upserting local rows into the remote store
    Upsert,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyncStage::Pull => "pull",
            SyncStage::Delete => "delete",
            SyncStage::Upsert => "upsert",
        })
    }
}

/// Comprehensive error type for all engine operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Malformed or out-of-range entity data
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Semester not found for the given ID
    #[error("Semester with ID {id} not found")]
    SemesterNotFound { id: String },
    /// Course not found for the given ID
    #[error("Course with ID {id} not found")]
    CourseNotFound { id: String },
    /// Import payload is not well-formed data
    #[error("Could not parse import data: {message}")]
    Parse { message: String },
    /// Remote failure during pull or push
    #[error("Sync failed during {stage}: {message}")]
    Sync { stage: SyncStage, message: String },
    /// The remote store rejected or failed a request
    #[error("Remote store error: {message}")]
    Remote { message: String },
    /// A pull or push is already in flight
    #[error("A sync operation is already in progress")]
    SyncInProgress,
    /// A pull or push did not finish in time
    #[error("Sync timed out after {secs}s")]
    SyncTimeout { secs: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`PlannerError`], as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Sync,
    Parse,
    Internal,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field path.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors on a field path such as
    /// `semesters[0].courses[1].credits`.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a sync error for the given stage.
    pub fn sync(stage: SyncStage, message: impl fmt::Display) -> Self {
        PlannerError::Sync {
            stage,
            message: message.to_string(),
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlannerError::Validation { .. } => ErrorKind::Validation,
            PlannerError::SemesterNotFound { .. } | PlannerError::CourseNotFound { .. } => {
                ErrorKind::NotFound
            }
            PlannerError::Parse { .. } => ErrorKind::Parse,
            PlannerError::Sync { .. }
            | PlannerError::Remote { .. }
            | PlannerError::SyncInProgress
            | PlannerError::SyncTimeout { .. } => ErrorKind::Sync,
            PlannerError::Database { .. }
            | PlannerError::FileSystem { .. }
            | PlannerError::XdgDirectory(_)
            | PlannerError::Serialization { .. }
            | PlannerError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Whether retrying the same operation later could succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Sync
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_builder_formats_field_path() {
        let err = PlannerError::validation("semesters[0].year").with_reason("must be between 2020 and 2030");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'semesters[0].year': must be between 2020 and 2030"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_sync_errors_are_retryable() {
        let err = PlannerError::sync(SyncStage::Upsert, "connection reset");
        assert_eq!(err.to_string(), "Sync failed during upsert: connection reset");
        assert!(err.is_retryable());
        assert!(PlannerError::SyncTimeout { secs: 30 }.is_retryable());
        assert!(PlannerError::SyncInProgress.is_retryable());
    }

    #[test]
    fn test_not_found_kind() {
        let err = PlannerError::CourseNotFound { id: "abc".into() };
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
