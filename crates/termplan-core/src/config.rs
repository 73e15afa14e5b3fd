//! Engine configuration.

use crate::{
    error::{PlannerError, Result},
    history::DEFAULT_HISTORY_LIMIT,
};

/// Colors handed out round-robin to new courses.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Tunables for a [`crate::Planner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of undo checkpoints
    pub history_limit: usize,
    /// Course color palette, assigned by sibling count modulo its length
    pub palette: Vec<String>,
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(PlannerError::Configuration {
                message: "history limit must be at least 1".to_string(),
            });
        }
        if self.palette.is_empty() {
            return Err(PlannerError::Configuration {
                message: "color palette must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Color for the next course of a semester that currently has
    /// `sibling_count` courses.
    pub fn color_for(&self, sibling_count: usize) -> String {
        self.palette[sibling_count % self.palette.len()].clone()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_color_wraps_around_palette() {
        let config = PlannerConfig::default();
        assert_eq!(config.color_for(0), DEFAULT_PALETTE[0]);
        assert_eq!(config.color_for(8), DEFAULT_PALETTE[0]);
        assert_eq!(config.color_for(9), DEFAULT_PALETTE[1]);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = PlannerConfig {
            palette: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
