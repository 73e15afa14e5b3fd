//! Semester model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Course, Season};

/// Container of courses plus temporal metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    /// Opaque identifier, assigned at creation and never changed
    pub id: String,

    pub name: String,

    /// Calendar year (2020..=2030)
    pub year: u16,

    pub season: Season,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// At most one semester in a plan carries `Some(true)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Ordered course list; order drives display and reordering
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn is_active(&self) -> bool {
        self.is_active == Some(true)
    }

    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| u32::from(c.credits)).sum()
    }
}
