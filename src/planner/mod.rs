pub mod allocation;
pub mod combinations;
pub mod constants;
pub mod energy;
pub mod progress;
pub mod ranking;

pub use allocation::compute_meal_budgets;
pub use combinations::{
    ExtrasPolicy, build_combinations, build_combinations_with, combination_count,
};
pub use constants::*;
pub use energy::{
    compute_bmr, compute_daily_budget, compute_daily_deficit, compute_energy_budget,
    compute_macro_targets, compute_tdee, is_deficit_safe, lean_body_mass, total_fat_loss_kg,
};
pub use progress::{
    BodyFatCategory, InBodyScoreCategory, body_fat_category, compute_progress, days_elapsed,
    inbody_score_category, timeline_progress_pct, weight_progress_pct,
};
pub use ranking::{plan_day, plan_week, recommend_meal, select_breakfast, select_meals};
