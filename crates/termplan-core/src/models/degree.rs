//! Degree model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The degree a plan works towards; used only for progress reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub name: String,

    /// Credits needed to graduate (1..=300)
    pub total_credits_required: u16,
}
