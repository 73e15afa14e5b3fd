//! Portable JSON envelope used for export and import.
//!
//! The envelope is the only place version metadata is attached. Import goes
//! the other way through [`crate::validation::import`], which accepts older
//! and looser shapes than the ones written here.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Degree, Plan, Semester};

/// Version written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// Versioned, self-contained snapshot of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub semesters: Vec<Semester>,
    pub notes: String,
    pub degree: Option<Degree>,
    /// ISO-8601 timestamp of the export
    pub export_date: String,
    pub version: String,
}

impl ExportEnvelope {
    /// Builds an envelope from the exportable parts of a plan.
    pub fn from_plan(plan: &Plan, export_date: jiff::Timestamp) -> Self {
        Self {
            semesters: plan.semesters.clone(),
            notes: plan.notes.clone(),
            degree: plan.degree.clone(),
            export_date: export_date.to_string(),
            version: EXPORT_VERSION.to_string(),
        }
    }
}

/// Counts describing a successful import.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub semesters: usize,
    pub courses: usize,
}

/// JSON Schema of [`ExportEnvelope`], pretty-printed.
#[cfg(feature = "schema")]
pub fn envelope_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(ExportEnvelope);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_field_names() {
        let envelope = ExportEnvelope::from_plan(&Plan::default(), jiff::Timestamp::UNIX_EPOCH);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["version"], EXPORT_VERSION);
        assert_eq!(json["exportDate"], "1970-01-01T00:00:00Z");
        assert!(json["degree"].is_null());
        assert_eq!(json["notes"], "");
        assert!(json["semesters"].as_array().unwrap().is_empty());
    }

    #[cfg(feature = "schema")]
    #[test]
    fn test_schema_mentions_envelope_fields() {
        let schema = envelope_schema().unwrap();
        assert!(schema.contains("exportDate"));
        assert!(schema.contains("totalCreditsRequired"));
    }
}
