use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::ExtrasPolicy;
use crate::planner::constants::{
    BREAKFAST_COUNT, BREAKFAST_SLACK_KCAL, DEFAULT_BREAKFAST_SHARE, DEFAULT_MEAL_COUNT,
    DEFAULT_TOLERANCE_KCAL, round_kcal,
};

/// Runtime-configurable selection knobs.
///
/// Every field is optional in the JSON form and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum distance from a lunch/dinner target before falling back (kcal).
    pub tolerance_kcal: f64,
    /// Number of lunch/dinner options to recommend.
    pub meal_count: usize,
    /// How far café items may exceed the breakfast target (kcal).
    pub breakfast_slack_kcal: f64,
    /// Number of café items to suggest.
    pub breakfast_count: usize,
    /// Share of the daily budget used as breakfast target when none is given.
    pub breakfast_share: f64,
    pub extras: ExtrasPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance_kcal: DEFAULT_TOLERANCE_KCAL,
            meal_count: DEFAULT_MEAL_COUNT,
            breakfast_slack_kcal: BREAKFAST_SLACK_KCAL,
            breakfast_count: BREAKFAST_COUNT,
            breakfast_share: DEFAULT_BREAKFAST_SHARE,
            extras: ExtrasPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.meal_count == 0 || self.breakfast_count == 0 {
            return Err(PlannerError::InvalidInput(format!(
                "meal_count and breakfast_count must be at least 1, got {} and {}",
                self.meal_count, self.breakfast_count
            )));
        }
        if !self.tolerance_kcal.is_finite() || self.tolerance_kcal < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "tolerance_kcal must be non-negative, got {}",
                self.tolerance_kcal
            )));
        }
        if !self.breakfast_slack_kcal.is_finite() || self.breakfast_slack_kcal < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "breakfast_slack_kcal must be non-negative, got {}",
                self.breakfast_slack_kcal
            )));
        }
        if !(0.0..1.0).contains(&self.breakfast_share) {
            return Err(PlannerError::InvalidInput(format!(
                "breakfast_share must be within [0, 1), got {}",
                self.breakfast_share
            )));
        }
        Ok(())
    }

    /// Default breakfast target for a daily budget.
    pub fn breakfast_target(&self, daily_budget_kcal: f64) -> f64 {
        round_kcal(daily_budget_kcal * self.breakfast_share)
    }
}
