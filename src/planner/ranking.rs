use tracing::debug;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::models::{Day, DayPlan, MealBudgets, MealCombination, MealType, NutritionItem};
use crate::planner::allocation::compute_meal_budgets;
use crate::planner::combinations::build_combinations_with;

/// Sort by calorie distance to the target, keeping generation order on ties.
fn closest_first(candidates: &mut [&MealCombination], target_kcal: f64) {
    candidates.sort_by(|a, b| {
        a.distance(target_kcal)
            .total_cmp(&b.distance(target_kcal))
    });
}

/// Pick the combinations closest to a calorie target.
///
/// Combinations within `tolerance_kcal` of the target are ranked by distance
/// and returned with `over_budget = false`. If none are within tolerance, the
/// whole list is ranked instead and every result is flagged `over_budget`.
/// Returns empty only when `combinations` is empty.
pub fn select_meals(
    combinations: &[MealCombination],
    target_kcal: f64,
    tolerance_kcal: f64,
    count: usize,
) -> Vec<MealCombination> {
    let mut within: Vec<&MealCombination> = combinations
        .iter()
        .filter(|c| c.distance(target_kcal) <= tolerance_kcal)
        .collect();

    let over_budget = within.is_empty();
    if over_budget {
        debug!(
            target_kcal,
            tolerance_kcal,
            candidates = combinations.len(),
            "no combination within tolerance, falling back to closest"
        );
        within = combinations.iter().collect();
    }

    closest_first(&mut within, target_kcal);

    within
        .into_iter()
        .take(count)
        .map(|c| MealCombination {
            over_budget,
            ..c.clone()
        })
        .collect()
}

/// Suggest café items for breakfast.
///
/// Keeps items at most `slack_kcal` above the target (no lower bound), ordered
/// by protein, highest first.
pub fn select_breakfast(
    cafe_items: &[NutritionItem],
    target_kcal: f64,
    slack_kcal: f64,
    count: usize,
) -> Vec<NutritionItem> {
    let mut eligible: Vec<&NutritionItem> = cafe_items
        .iter()
        .filter(|item| item.calories <= target_kcal + slack_kcal)
        .collect();

    eligible.sort_by(|a, b| b.protein.total_cmp(&a.protein));

    eligible.into_iter().take(count).cloned().collect()
}

/// Recommended combinations for one meal of one day.
pub fn recommend_meal(
    catalog: &Catalog,
    day: Day,
    meal: MealType,
    target_kcal: f64,
    config: &PlannerConfig,
) -> Vec<MealCombination> {
    let Some(option) = catalog.meal(day, meal) else {
        debug!(%day, %meal, "no menu for meal");
        return Vec::new();
    };

    let combos = build_combinations_with(option, config.extras);
    select_meals(&combos, target_kcal, config.tolerance_kcal, config.meal_count)
}

/// Lunch and dinner recommendations for a day after the chosen breakfast.
pub fn plan_day(
    catalog: &Catalog,
    day: Day,
    daily_budget_kcal: f64,
    breakfast_kcal: f64,
    config: &PlannerConfig,
) -> DayPlan {
    let budgets: MealBudgets = compute_meal_budgets(daily_budget_kcal, breakfast_kcal);
    let lunch = recommend_meal(catalog, day, MealType::Lunch, budgets.lunch_kcal, config);
    let dinner = recommend_meal(catalog, day, MealType::Dinner, budgets.dinner_kcal, config);

    DayPlan {
        day,
        budgets,
        lunch,
        dinner,
    }
}

/// [`plan_day`] for every day of the week, Monday first.
pub fn plan_week(
    catalog: &Catalog,
    daily_budget_kcal: f64,
    breakfast_kcal: f64,
    config: &PlannerConfig,
) -> Vec<DayPlan> {
    Day::ALL
        .into_iter()
        .map(|day| plan_day(catalog, day, daily_budget_kcal, breakfast_kcal, config))
        .collect()
}
