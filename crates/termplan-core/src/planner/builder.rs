//! Builder for creating and configuring Planner instances.

use super::Planner;
use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    history::ActionHistory,
    models::Plan,
    validation::validate_plan,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    config: PlannerConfig,
    plan: Option<Plan>,
    history: Option<ActionHistory>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many undo checkpoints are kept.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Replaces the course color palette.
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Starts from an existing plan instead of an empty one.
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Resumes a previously saved history.
    pub fn with_history(mut self, history: ActionHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the configuration is invalid
    /// or a resumed history is inconsistent
    /// Returns `PlannerError::Validation` if the initial plan breaks an
    /// entity rule
    pub fn build(self) -> Result<Planner> {
        self.config.validate()?;

        let plan = self.plan.unwrap_or_default();
        validate_plan(&plan)?;

        let history = match self.history {
            Some(history) if history.limit() != self.config.history_limit => {
                return Err(PlannerError::Configuration {
                    message: format!(
                        "saved history keeps {} entries but the planner is configured for {}",
                        history.limit(),
                        self.config.history_limit
                    ),
                })
            }
            Some(history) => {
                history.check()?;
                history
            }
            None => ActionHistory::new(self.config.history_limit),
        };

        Ok(Planner::new(plan, history, self.config))
    }
}
