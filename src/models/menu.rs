use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::NutritionItem;

/// Day of the weekly menu rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }

    /// The menu day for the local date.
    pub fn today() -> Self {
        Self::from_weekday(Local::now().weekday())
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = PlannerError;

    /// Accepts full names and three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| d.name() == lower || (lower.len() == 3 && d.name().starts_with(&lower)))
            .ok_or_else(|| PlannerError::UnknownDay(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(PlannerError::InvalidInput(format!(
                "unknown meal type '{}'",
                other
            ))),
        }
    }
}

/// Dietary capability of a protein group.
///
/// Declaration order is the order groups are unioned in when building combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinKind {
    NonVegan,
    Vegan,
    Vegetarian,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinGroup {
    pub kind: ProteinKind,
    #[serde(default)]
    pub items: Vec<NutritionItem>,
}

/// Groups shown alongside a meal that are not part of the core combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Topping,
    Dressing,
    Side,
    Dessert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraGroup {
    pub kind: ExtraKind,
    #[serde(default)]
    pub items: Vec<NutritionItem>,
}

/// The component groups served for one meal on one day.
///
/// Protein and extra groups are tagged rather than fixed fields: a day that has
/// no vegetarian protein simply has no such group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealOption {
    #[serde(default)]
    pub base: Vec<NutritionItem>,
    #[serde(default)]
    pub proteins: Vec<ProteinGroup>,
    #[serde(default)]
    pub veggies: Vec<NutritionItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ExtraGroup>,
}

impl MealOption {
    /// Items of one protein kind; empty when the day has none.
    pub fn protein(&self, kind: ProteinKind) -> impl Iterator<Item = &NutritionItem> {
        self.proteins
            .iter()
            .filter(move |g| g.kind == kind)
            .flat_map(|g| g.items.iter())
    }

    /// Every protein option, non-vegan first, then vegan, then vegetarian.
    pub fn all_proteins(&self) -> Vec<&NutritionItem> {
        let mut groups: Vec<&ProteinGroup> = self.proteins.iter().collect();
        groups.sort_by_key(|g| g.kind);
        groups.into_iter().flat_map(|g| g.items.iter()).collect()
    }

    /// Items of one extra kind; empty when the day has none.
    pub fn extra(&self, kind: ExtraKind) -> impl Iterator<Item = &NutritionItem> {
        self.extras
            .iter()
            .filter(move |g| g.kind == kind)
            .flat_map(|g| g.items.iter())
    }

    /// Every item in every group.
    pub fn all_items(&self) -> impl Iterator<Item = &NutritionItem> {
        self.base
            .iter()
            .chain(self.proteins.iter().flat_map(|g| g.items.iter()))
            .chain(self.veggies.iter())
            .chain(self.extras.iter().flat_map(|g| g.items.iter()))
    }
}

/// A day's full menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMenu {
    pub lunch: MealOption,
    pub dinner: MealOption,
}

impl DayMenu {
    /// The component groups for a meal; breakfast is served from the café list instead.
    pub fn meal(&self, meal: MealType) -> Option<&MealOption> {
        match meal {
            MealType::Lunch => Some(&self.lunch),
            MealType::Dinner => Some(&self.dinner),
            MealType::Breakfast => None,
        }
    }
}
