use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// A single dish or meal component with its nutritional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionItem {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,

    /// Labels of constituent items when this item is itself a combination.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
}

impl NutritionItem {
    pub fn new(name: &str, calories: f64, carbs: f64, protein: f64, fat: f64, fiber: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            carbs,
            protein,
            fat,
            fiber,
            components: Vec::new(),
        }
    }

    /// All nutritional values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.carbs, self.protein, self.fat, self.fiber]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Label used when listing this item inside a combination, e.g. `Quinoa (171.9)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.calories)
    }

    pub fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            carbs: self.carbs,
            protein: self.protein,
            fat: self.fat,
            fiber: self.fiber,
        }
    }
}

/// Summed macros across several items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionTotals {
    pub fn sum<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a NutritionItem>,
    {
        items.into_iter().fold(Self::default(), |mut total, item| {
            total += item.totals();
            total
        })
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.carbs += rhs.carbs;
        self.protein += rhs.protein;
        self.fat += rhs.fat;
        self.fiber += rhs.fiber;
    }
}
