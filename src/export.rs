use std::path::Path;

use crate::error::Result;
use crate::models::{DayPlan, MealCombination, MealType};

const HEADER: [&str; 12] = [
    "day",
    "meal",
    "rank",
    "target_kcal",
    "name",
    "calories",
    "carbs",
    "protein",
    "fat",
    "fiber",
    "distance_kcal",
    "over_budget",
];

fn row(
    plan: &DayPlan,
    meal: MealType,
    target_kcal: f64,
    rank: usize,
    combo: &MealCombination,
) -> [String; 12] {
    [
        plan.day.name().to_string(),
        meal.name().to_string(),
        rank.to_string(),
        format!("{:.0}", target_kcal),
        combo.name.clone(),
        format!("{:.1}", combo.calories),
        format!("{:.1}", combo.carbs),
        format!("{:.1}", combo.protein),
        format!("{:.1}", combo.fat),
        format!("{:.1}", combo.fiber),
        format!("{:.1}", combo.distance(target_kcal)),
        combo.over_budget.to_string(),
    ]
}

/// Write every recommended lunch and dinner of `plans` to a CSV file.
pub fn write_week_csv(plans: &[DayPlan], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for plan in plans {
        let meals = [
            (MealType::Lunch, plan.budgets.lunch_kcal, &plan.lunch),
            (MealType::Dinner, plan.budgets.dinner_kcal, &plan.dinner),
        ];
        for (meal, target, options) in meals {
            for (i, combo) in options.iter().enumerate() {
                wtr.write_record(row(plan, meal, target, i + 1, combo))?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
