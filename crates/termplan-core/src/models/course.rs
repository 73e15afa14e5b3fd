//! Course model definition.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Weekday;

/// A single academic course instance inside one semester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Opaque identifier, assigned at creation and never changed
    pub id: String,

    /// Course name (1..=100 chars)
    pub name: String,

    /// Credit value (1..=6)
    pub credits: u8,

    /// Meeting days; order is not significant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<BTreeSet<Weekday>>,

    /// Meeting start time as `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Meeting end time as `HH:MM`, strictly later than `start_time`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Grade points in 0.0..=4.0; `None` means not graded yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,

    /// Display color assigned from the palette at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Course {
    /// Whether the course carries enough schedule data to take part in
    /// conflict detection and the weekly schedule.
    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some()
            && self.end_time.is_some()
            && self.days_of_week.as_ref().is_some_and(|days| !days.is_empty())
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}
