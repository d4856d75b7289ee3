use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, BodyCompositionProfile, Gender, NutritionItem};

/// Prompt for a number, re-using `default` when the user just presses Enter.
fn prompt_number<T>(prompt: &str, default: Option<T>) -> Result<T>
where
    T: FromStr + ToString,
{
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    let raw = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", raw)))
}

/// Prompt for an optional number; an empty answer means "not measured".
fn prompt_optional<T>(prompt: &str, current: Option<T>) -> Result<Option<T>>
where
    T: FromStr + ToString,
{
    let raw: String = Input::new()
        .with_prompt(format!("{} (optional)", prompt))
        .with_initial_text(current.map(|v| v.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", raw)))
}

fn prompt_gender(current: Option<Gender>) -> Result<Gender> {
    let options = ["Male", "Female"];
    let default = match current {
        Some(Gender::Female) => 1,
        _ => 0,
    };
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(if selection == 1 {
        Gender::Female
    } else {
        Gender::Male
    })
}

fn prompt_activity_level(current: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} (×{})", level.label(), level.multiplier()))
        .collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|level| *level == current)
        .unwrap_or(2);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Collect a full body-composition profile, pre-filled from `existing`.
///
/// The result is validated before it is returned.
pub fn prompt_profile(existing: Option<&BodyCompositionProfile>) -> Result<BodyCompositionProfile> {
    let profile = BodyCompositionProfile {
        current_weight_kg: prompt_number(
            "Current weight (kg)",
            existing.map(|p| p.current_weight_kg),
        )?,
        current_body_fat_pct: prompt_number(
            "Current body fat (%)",
            existing.map(|p| p.current_body_fat_pct),
        )?,
        target_weight_kg: prompt_number(
            "Target weight (kg)",
            existing.map(|p| p.target_weight_kg),
        )?,
        target_body_fat_pct: prompt_number(
            "Target body fat (%)",
            existing.map(|p| p.target_body_fat_pct),
        )?,
        height_cm: prompt_number("Height (cm)", existing.map(|p| p.height_cm))?,
        age_years: prompt_number("Age (years)", existing.map(|p| p.age_years))?,
        gender: prompt_gender(existing.map(|p| p.gender))?,
        activity_level: prompt_activity_level(
            existing.map(|p| p.activity_level).unwrap_or_default(),
        )?,
        days_to_goal: prompt_number(
            "Days to goal",
            Some(existing.map(|p| p.days_to_goal).unwrap_or(90)),
        )?,
        skeletal_muscle_mass_kg: prompt_optional(
            "Skeletal muscle mass (kg)",
            existing.and_then(|p| p.skeletal_muscle_mass_kg),
        )?,
        in_body_score: prompt_optional("InBody score", existing.and_then(|p| p.in_body_score))?,
    };

    profile.validate()?;
    Ok(profile)
}

/// Let the user pick one of the suggested café items, or skip breakfast.
pub fn prompt_breakfast(options: &[NutritionItem]) -> Result<Option<NutritionItem>> {
    if options.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<String> = options
        .iter()
        .map(|i| format!("{} - {:.0} kcal, P:{:.0}g", i.name, i.calories, i.protein))
        .collect();
    labels.push("Skip breakfast".to_string());

    let selection = Select::new()
        .with_prompt("Pick a breakfast")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
