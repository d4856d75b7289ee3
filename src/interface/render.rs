use crate::models::{
    BodyCompositionProfile, DayPlan, EnergyBudget, IntakeRecord, MacroTargets, MealBudgets,
    MealCombination, NutritionItem, NutritionTotals, Progress,
};
use crate::planner::{body_fat_category, inbody_score_category};

/// Display the energy budget and macro targets for a profile.
pub fn display_energy_budget(
    profile: &BodyCompositionProfile,
    budget: &EnergyBudget,
    macros: &MacroTargets,
) {
    println!();
    println!("=== Energy Budget ===");
    println!();
    println!("BMR:            {:>6.0} kcal", budget.bmr_kcal);
    println!(
        "TDEE:           {:>6.0} kcal ({})",
        budget.tdee_kcal,
        profile.activity_level.label()
    );
    println!("Daily deficit:  {:>6.0} kcal", budget.daily_deficit_kcal);
    println!("Daily budget:   {:>6.0} kcal", budget.daily_budget_kcal);
    if !budget.deficit_safe {
        println!("  Warning: deficit exceeds min(1000 kcal, 25% of TDEE)");
    }

    println!();
    println!(
        "Body fat:  {:.1}% ({}) -> {:.1}% ({})",
        profile.current_body_fat_pct,
        body_fat_category(profile.current_body_fat_pct, profile.gender),
        profile.target_body_fat_pct,
        body_fat_category(profile.target_body_fat_pct, profile.gender),
    );
    println!(
        "Lean mass: {:.1} kg -> {:.1} kg",
        budget.lean_body_mass_kg, budget.target_lean_body_mass_kg
    );
    println!(
        "Fat to lose: {:.1} kg over {} days",
        budget.total_fat_loss_kg, profile.days_to_goal
    );
    if let Some(smm) = profile.skeletal_muscle_mass_kg {
        println!("Skeletal muscle mass: {:.1} kg", smm);
    }
    if let Some(score) = profile.in_body_score {
        println!("InBody score: {}/100 ({})", score, inbody_score_category(score));
    }

    println!();
    println!("--- Macro Targets ---");
    println!("Protein: {:>4.0} g ({:.0} kcal)", macros.protein_g, macros.protein_kcal);
    println!("Carbs:   {:>4.0} g ({:.0} kcal)", macros.carbs_g, macros.carbs_kcal);
    println!("Fat:     {:>4.0} g ({:.0} kcal)", macros.fat_g, macros.fat_kcal);
    println!();
}

pub fn display_meal_budgets(budgets: &MealBudgets) {
    println!();
    println!("=== Daily Calorie Distribution ===");
    println!(
        "Breakfast {:.0} | Lunch {:.0} | Dinner {:.0}  (total {:.0}, remaining {:.0})",
        budgets.breakfast_kcal,
        budgets.lunch_kcal,
        budgets.dinner_kcal,
        budgets.total_kcal,
        budgets.remaining_kcal
    );
    if budgets.is_overdrawn() {
        println!("Warning: breakfast alone exceeds the daily budget.");
    }
}

/// Display recommended combinations for one meal.
pub fn display_meal_options(title: &str, target_kcal: f64, options: &[MealCombination]) {
    println!();
    println!("--- {} ({:.0} kcal) ---", title, target_kcal);

    if options.is_empty() {
        println!("No meals on the menu for this day.");
        return;
    }
    if options.iter().any(|o| o.over_budget) {
        println!("No meals within tolerance; showing the closest matches.");
    }

    for (i, combo) in options.iter().enumerate() {
        let diff = combo.calories - target_kcal;
        println!(
            "{:>3}. {} - {:.0} kcal ({:+.0})",
            i + 1,
            combo.name,
            combo.calories,
            diff
        );
        println!(
            "     C:{:.0}g P:{:.0}g F:{:.0}g Fiber:{:.0}g",
            combo.carbs, combo.protein, combo.fat, combo.fiber
        );
        println!("     {}", combo.component_labels().join(" + "));
    }
}

pub fn display_day_plan(plan: &DayPlan) {
    println!();
    println!("=== {} ===", capitalize(plan.day.name()));
    display_meal_budgets(&plan.budgets);
    display_meal_options("Lunch", plan.budgets.lunch_kcal, &plan.lunch);
    display_meal_options("Dinner", plan.budgets.dinner_kcal, &plan.dinner);
    println!();
}

/// Display café suggestions for breakfast.
pub fn display_breakfast_options(target_kcal: f64, items: &[NutritionItem]) {
    println!();
    println!("--- Breakfast (target {:.0} kcal) ---", target_kcal);
    if items.is_empty() {
        println!("No café items fit this target.");
        return;
    }

    let width = items.iter().map(|i| i.name.len()).max().unwrap_or(10);
    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4.0} kcal | P:{:.1}g C:{:.1}g F:{:.1}g",
            i + 1,
            item.name,
            item.calories,
            item.protein,
            item.carbs,
            item.fat,
            width = width
        );
    }
    println!();
}

pub fn display_progress(
    profile: &BodyCompositionProfile,
    start_weight_kg: f64,
    progress: &Progress,
) {
    println!();
    println!("=== Progress ===");
    println!();
    match progress.weight_progress_pct {
        Some(pct) => println!(
            "Weight:   {:>3.0}%  ({:.1} kg -> {:.1} kg, now {:.1} kg)",
            pct, start_weight_kg, profile.target_weight_kg, profile.current_weight_kg
        ),
        None => println!("Weight:   n/a (start weight equals target weight)"),
    }
    println!(
        "Timeline: {:>3.0}%  (day {} of {})",
        progress.timeline_progress_pct, progress.days_elapsed, profile.days_to_goal
    );
    if let Some(score) = profile.in_body_score {
        println!("InBody:   {}/100 ({})", score, inbody_score_category(score));
    }
    println!();
}

/// Display intake records for a day with their totals.
pub fn display_intake(records: &[IntakeRecord], daily_budget_kcal: Option<f64>) {
    if records.is_empty() {
        println!("No meals recorded.");
        return;
    }

    println!();
    for record in records {
        println!(
            "#{:<4} {:<9} {} - {:.0} kcal",
            record.id, record.meal_type, record.item_name, record.calories
        );
    }

    let items: Vec<NutritionItem> = records.iter().map(IntakeRecord::as_item).collect();
    let totals = NutritionTotals::sum(&items);
    println!();
    println!(
        "Daily total: {:.0} kcal | C:{:.0}g P:{:.0}g F:{:.0}g Fiber:{:.0}g",
        totals.calories, totals.carbs, totals.protein, totals.fat, totals.fiber
    );
    if let Some(budget) = daily_budget_kcal {
        println!("Remaining:   {:.0} kcal", budget - totals.calories);
    }
    println!();
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
