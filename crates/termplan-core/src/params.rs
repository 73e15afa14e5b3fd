//! Parameter structures for engine operations.
//!
//! These are the shapes the UI (or the CLI) hands to the mutation primitives
//! of [`crate::Planner`]. They carry typed values but are not trusted: every
//! primitive runs the merged result through [`crate::validation`] before
//! touching the plan.
//!
//! Partial updates use `Option<Option<T>>` for clearable fields: `None` leaves
//! the field alone, `Some(None)` clears it and `Some(Some(v))` sets it.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{Season, Weekday};

/// Deserializes a present-but-null field as `Some(None)` instead of `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parameters for creating a new semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateSemester {
    pub name: String,
    pub year: u16,
    pub season: Season,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update of a semester.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateSemester {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    /// Setting `true` clears the flag on every other semester
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Parameters for adding a course to a semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    pub name: String,
    pub credits: u8,
    #[serde(default)]
    pub days_of_week: Option<BTreeSet<Weekday>>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateCourse {
    /// A course with only the required fields set.
    pub fn new(name: impl Into<String>, credits: u8) -> Self {
        Self {
            name: name.into(),
            credits,
            days_of_week: None,
            start_time: None,
            end_time: None,
            grade: None,
            notes: None,
        }
    }

    /// Adds a weekly meeting slot.
    pub fn meeting(
        mut self,
        days: impl IntoIterator<Item = Weekday>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.days_of_week = Some(days.into_iter().collect());
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn graded(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }
}

/// Partial update of a course. The color is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub credits: Option<u8>,
    #[serde(default, deserialize_with = "double_option")]
    pub days_of_week: Option<Option<BTreeSet<Weekday>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub grade: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Move semantics on an ordered list: the item at `from` ends up at `to`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}
