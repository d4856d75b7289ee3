use serde::{Deserialize, Serialize};

/// Daily energy figures derived from a profile, rounded for display.
///
/// kcal values are whole numbers, kg values carry one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBudget {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub daily_deficit_kcal: f64,
    pub daily_budget_kcal: f64,
    pub lean_body_mass_kg: f64,
    pub target_lean_body_mass_kg: f64,
    pub total_fat_loss_kg: f64,

    /// Whether the unrounded deficit stays within the safe bound.
    pub deficit_safe: bool,
}

/// Daily macronutrient targets in grams and kcal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub protein_kcal: f64,
    pub carbs_kcal: f64,
    pub fat_kcal: f64,
}

/// The daily budget split across meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealBudgets {
    pub breakfast_kcal: f64,
    pub lunch_kcal: f64,
    pub dinner_kcal: f64,
    pub total_kcal: f64,

    /// Budget left after breakfast. Negative when breakfast alone exceeds the total.
    pub remaining_kcal: f64,
}

impl MealBudgets {
    pub fn is_overdrawn(&self) -> bool {
        self.remaining_kcal < 0.0
    }
}

/// Progress toward the goal, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// `None` when the start weight equals the target weight.
    pub weight_progress_pct: Option<f64>,
    pub timeline_progress_pct: f64,
    pub days_elapsed: u32,
}
