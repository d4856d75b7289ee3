//! Daily energy budget from body-composition input.
//!
//! Every function here works on unrounded values; rounding happens once, in
//! [`compute_energy_budget`], when the figures are packaged for display.

use tracing::debug;

use crate::error::Result;
use crate::models::{ActivityLevel, BodyCompositionProfile, EnergyBudget, Gender, MacroTargets};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// ```text
/// BMR = 10 × weight + 6.25 × height − 5 × age + (5 male | −161 female)
/// ```
pub fn compute_bmr(profile: &BodyCompositionProfile) -> f64 {
    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * profile.current_weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age_years as f64
        + offset
}

/// Total daily energy expenditure.
#[inline]
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Fat to lose between now and the goal (kg). Negative for a fat gain.
pub fn total_fat_loss_kg(profile: &BodyCompositionProfile) -> f64 {
    profile.current_fat_mass_kg() - profile.target_fat_mass_kg()
}

/// Daily deficit needed to reach the goal fat mass in `days_to_goal` days.
///
/// Negative when the goal implies gaining fat. Zero when `days_to_goal` is 0.
pub fn compute_daily_deficit(profile: &BodyCompositionProfile) -> f64 {
    if profile.days_to_goal == 0 {
        return 0.0;
    }
    total_fat_loss_kg(profile) * KCAL_PER_KG_FAT / profile.days_to_goal as f64
}

#[inline]
pub fn compute_daily_budget(tdee: f64, daily_deficit: f64) -> f64 {
    tdee - daily_deficit
}

/// A deficit is safe iff it is at most `min(1000, 0.25 × TDEE)`. Inclusive.
pub fn is_deficit_safe(tdee: f64, deficit: f64) -> bool {
    let max_deficit = MAX_SAFE_DEFICIT_KCAL.min(tdee * MAX_SAFE_DEFICIT_TDEE_FRACTION);
    deficit <= max_deficit
}

#[inline]
pub fn lean_body_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * (1.0 - body_fat_pct / 100.0)
}

/// Compute the full energy budget for a profile.
///
/// Fails with `InvalidInput` if the profile cannot be evaluated (non-positive
/// weight, target weight or height, and the other checks in
/// [`BodyCompositionProfile::validate`]).
pub fn compute_energy_budget(profile: &BodyCompositionProfile) -> Result<EnergyBudget> {
    profile.validate()?;

    let bmr = compute_bmr(profile);
    let tdee = compute_tdee(bmr, profile.activity_level);
    let deficit = compute_daily_deficit(profile);
    let budget = compute_daily_budget(tdee, deficit);

    debug!(bmr, tdee, deficit, budget, "computed energy budget");

    Ok(EnergyBudget {
        bmr_kcal: round_kcal(bmr),
        tdee_kcal: round_kcal(tdee),
        daily_deficit_kcal: round_kcal(deficit),
        daily_budget_kcal: round_kcal(budget),
        lean_body_mass_kg: round_tenth(lean_body_mass(
            profile.current_weight_kg,
            profile.current_body_fat_pct,
        )),
        target_lean_body_mass_kg: round_tenth(lean_body_mass(
            profile.target_weight_kg,
            profile.target_body_fat_pct,
        )),
        total_fat_loss_kg: round_tenth(total_fat_loss_kg(profile)),
        deficit_safe: is_deficit_safe(tdee, deficit),
    })
}

/// Macro split for a daily budget.
///
/// Protein is set from lean mass, fat takes a fixed share of the budget and
/// carbs fill what is left. Carbs go negative if protein and fat alone exceed
/// the budget; that is reported, not clamped.
pub fn compute_macro_targets(daily_budget_kcal: f64, lean_body_mass_kg: f64) -> MacroTargets {
    let protein_g = lean_body_mass_kg * PROTEIN_G_PER_KG_LBM;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = daily_budget_kcal * FAT_BUDGET_FRACTION;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carbs_kcal = daily_budget_kcal - protein_kcal - fat_kcal;
    let carbs_g = carbs_kcal / KCAL_PER_G_CARBS;

    MacroTargets {
        protein_g: round_kcal(protein_g),
        carbs_g: round_kcal(carbs_g),
        fat_g: round_kcal(fat_g),
        protein_kcal: round_kcal(protein_kcal),
        carbs_kcal: round_kcal(carbs_kcal),
        fat_kcal: round_kcal(fat_kcal),
    }
}
