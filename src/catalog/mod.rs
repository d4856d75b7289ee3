//! Static menu reference data.
//!
//! A [`Catalog`] is built once and only read afterwards. Callers own it and pass
//! it into planning functions; there is no shared instance.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Day, DayMenu, MealOption, MealType, NutritionItem};

/// The menu shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Minimum Jaro-Winkler score for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Café items plus a menu for each day of the week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    cafe: Vec<NutritionItem>,
    #[serde(default)]
    week: BTreeMap<Day, DayMenu>,
}

impl Catalog {
    pub fn new(cafe: Vec<NutritionItem>, week: BTreeMap<Day, DayMenu>) -> Result<Self> {
        let catalog = Self { cafe, week };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(
            cafe = catalog.cafe.len(),
            days = catalog.week.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The built-in weekly menu and café list.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Every item must carry finite, non-negative macros.
    pub fn validate(&self) -> Result<()> {
        let menu_items = self
            .week
            .values()
            .flat_map(|m| m.lunch.all_items().chain(m.dinner.all_items()));

        match self.cafe.iter().chain(menu_items).find(|i| !i.is_valid()) {
            Some(item) => Err(PlannerError::InvalidInput(format!(
                "catalog item '{}' has invalid nutrition values",
                item.name
            ))),
            None => Ok(()),
        }
    }

    pub fn cafe_items(&self) -> &[NutritionItem] {
        &self.cafe
    }

    pub fn day(&self, day: Day) -> Option<&DayMenu> {
        self.week.get(&day)
    }

    pub fn meal(&self, day: Day, meal: MealType) -> Option<&MealOption> {
        self.day(day).and_then(|m| m.meal(meal))
    }

    /// Days that have a menu, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.week.keys().copied()
    }

    /// Find a café item by name: exact (case-insensitive) first, then the best
    /// fuzzy match above [`FUZZY_MATCH_THRESHOLD`].
    pub fn find_cafe_item(&self, name: &str) -> Result<&NutritionItem> {
        find_by_name(&self.cafe, name, |i| i.name.as_str())
            .ok_or_else(|| PlannerError::ItemNotFound(name.to_string()))
    }
}

/// Exact case-insensitive match, else the closest fuzzy match above threshold.
pub fn find_by_name<'a, T, F>(items: &'a [T], query: &str, name_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(exact) = items.iter().find(|i| name_of(i).to_lowercase() == query) {
        return Some(exact);
    }

    items
        .iter()
        .map(|i| (i, jaro_winkler(&name_of(i).to_lowercase(), &query)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
