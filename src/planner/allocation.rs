use crate::models::MealBudgets;
use crate::planner::constants::{DINNER_SHARE, LUNCH_SHARE, round_kcal};

/// Split the daily budget into meal budgets after a chosen breakfast.
///
/// Lunch gets 40% of what is left after breakfast and dinner 60%, each rounded
/// independently, so `lunch + dinner` may differ from `remaining` by 1 kcal.
/// A breakfast larger than the budget leaves `remaining` negative.
pub fn compute_meal_budgets(daily_budget_kcal: f64, breakfast_kcal: f64) -> MealBudgets {
    let remaining = daily_budget_kcal - breakfast_kcal;

    MealBudgets {
        breakfast_kcal,
        lunch_kcal: round_kcal(remaining * LUNCH_SHARE),
        dinner_kcal: round_kcal(remaining * DINNER_SHARE),
        total_kcal: daily_budget_kcal,
        remaining_kcal: remaining,
    }
}
