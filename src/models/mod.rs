mod budget;
mod intake;
mod menu;
mod nutrition;
mod plan;
mod profile;

pub use budget::{EnergyBudget, MacroTargets, MealBudgets, Progress};
pub use intake::{IntakeRecord, NewIntake};
pub use menu::{
    Day, DayMenu, ExtraGroup, ExtraKind, MealOption, MealType, ProteinGroup, ProteinKind,
};
pub use nutrition::{NutritionItem, NutritionTotals};
pub use plan::{DayPlan, MealCombination};
pub use profile::{ActivityLevel, BodyCompositionProfile, Gender, ProfileRecord};

#[cfg(test)]
pub(crate) use profile::tests::sample_profile;
