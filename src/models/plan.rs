use serde::Serialize;

use crate::models::{Day, MealBudgets, NutritionItem, NutritionTotals};

/// A synthesized meal: one item from each required component group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCombination {
    /// Constituent names joined with " + ".
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub components: Vec<NutritionItem>,

    /// Set by selection when no combination fell within tolerance.
    pub over_budget: bool,
}

impl MealCombination {
    /// Combine components in order, summing their macros.
    pub fn from_components(components: Vec<NutritionItem>) -> Self {
        let totals = NutritionTotals::sum(&components);
        let name = components
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ");

        Self {
            name,
            calories: totals.calories,
            carbs: totals.carbs,
            protein: totals.protein,
            fat: totals.fat,
            fiber: totals.fiber,
            components,
            over_budget: false,
        }
    }

    /// Absolute calorie distance from a target.
    #[inline]
    pub fn distance(&self, target_kcal: f64) -> f64 {
        (self.calories - target_kcal).abs()
    }

    /// Component labels, e.g. `["Quinoa (171.9)", "Minced Beef (349.9)"]`.
    pub fn component_labels(&self) -> Vec<String> {
        self.components.iter().map(NutritionItem::label).collect()
    }

    /// Flatten into a single item, keeping component labels.
    pub fn to_item(&self) -> NutritionItem {
        NutritionItem {
            name: self.name.clone(),
            calories: self.calories,
            carbs: self.carbs,
            protein: self.protein,
            fat: self.fat,
            fiber: self.fiber,
            components: self.component_labels(),
        }
    }
}

/// Recommended lunch and dinner options for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub day: Day,
    pub budgets: MealBudgets,
    pub lunch: Vec<MealCombination>,
    pub dinner: Vec<MealCombination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components() {
        let combo = MealCombination::from_components(vec![
            NutritionItem::new("Quinoa", 171.9, 30.9, 5.6, 2.9, 3.4),
            NutritionItem::new("Minced Beef", 349.9, 2.6, 36.7, 21.4, 0.7),
            NutritionItem::new("Roasted Broccoli", 80.4, 11.1, 3.0, 2.7, 4.0),
        ]);

        assert_eq!(combo.name, "Quinoa + Minced Beef + Roasted Broccoli");
        assert!((combo.calories - 602.2).abs() < 1e-9);
        assert!((combo.protein - 45.3).abs() < 1e-9);
        assert!(!combo.over_budget);
        assert!((combo.distance(600.0) - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_to_item_keeps_labels() {
        let combo = MealCombination::from_components(vec![
            NutritionItem::new("Lentils", 128.8, 18.7, 9.0, 2.0, 7.7),
            NutritionItem::new("Tahini Salad", 76.1, 7.6, 2.3, 4.1, 3.0),
        ]);
        let item = combo.to_item();
        assert_eq!(item.components, vec!["Lentils (128.8)", "Tahini Salad (76.1)"]);
        assert_eq!(item.name, combo.name);
    }
}
