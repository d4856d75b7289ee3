use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ExtraKind, MealCombination, MealOption, NutritionItem};

/// Which groups contribute to a combination's summed macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrasPolicy {
    /// Base × protein × veggie only; toppings, dressings, sides and desserts
    /// are shown with the meal but not counted.
    #[default]
    CoreOnly,
    /// Also take one item from every non-empty extra group.
    AllGroups,
}

/// Cartesian product over groups, first group outermost.
fn cartesian<'a>(groups: &[Vec<&'a NutritionItem>]) -> Vec<Vec<&'a NutritionItem>> {
    groups.iter().fold(vec![Vec::new()], |acc, group| {
        acc.iter()
            .flat_map(|prefix| {
                group.iter().map(move |item| {
                    let mut next = prefix.clone();
                    next.push(*item);
                    next
                })
            })
            .collect()
    })
}

/// Expected number of combinations for a meal under a policy.
pub fn combination_count(option: &MealOption, policy: ExtrasPolicy) -> usize {
    let core = option.base.len() * option.all_proteins().len() * option.veggies.len();
    match policy {
        ExtrasPolicy::CoreOnly => core,
        ExtrasPolicy::AllGroups => extra_groups(option)
            .iter()
            .map(Vec::len)
            .product::<usize>()
            .saturating_mul(core),
    }
}

/// Non-empty extra groups in kind order.
fn extra_groups(option: &MealOption) -> Vec<Vec<&NutritionItem>> {
    [
        ExtraKind::Topping,
        ExtraKind::Dressing,
        ExtraKind::Side,
        ExtraKind::Dessert,
    ]
    .into_iter()
    .map(|kind| option.extra(kind).collect::<Vec<_>>())
    .filter(|g| !g.is_empty())
    .collect()
}

/// Build every combination for one meal with the default policy.
pub fn build_combinations(option: &MealOption) -> Vec<MealCombination> {
    build_combinations_with(option, ExtrasPolicy::default())
}

/// Build every combination for one meal.
///
/// Iterates base, then protein (non-vegan, vegan, vegetarian), then veggie,
/// then any counted extras. Returns an empty list when the meal has no base,
/// no protein, or no veggie.
pub fn build_combinations_with(option: &MealOption, policy: ExtrasPolicy) -> Vec<MealCombination> {
    let mut groups: Vec<Vec<&NutritionItem>> = vec![
        option.base.iter().collect(),
        option.all_proteins(),
        option.veggies.iter().collect(),
    ];

    if groups.iter().any(Vec::is_empty) {
        debug!("meal is missing a required group; no combinations");
        return Vec::new();
    }

    if policy == ExtrasPolicy::AllGroups {
        groups.extend(extra_groups(option));
    }

    let combos: Vec<MealCombination> = cartesian(&groups)
        .into_iter()
        .map(|items| MealCombination::from_components(items.into_iter().cloned().collect()))
        .collect();

    debug!(count = combos.len(), ?policy, "built meal combinations");
    combos
}
