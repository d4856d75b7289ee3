use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MealCombination, MealType, NutritionItem};

/// A recorded meal selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: u64,
    pub user_id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub item_name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl IntakeRecord {
    /// The record's macros as an item, for totalling.
    pub fn as_item(&self) -> NutritionItem {
        NutritionItem::new(
            &self.item_name,
            self.calories,
            self.carbs,
            self.protein,
            self.fat,
            self.fiber,
        )
    }
}

/// An intake record before the store assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIntake {
    pub user_id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub item_name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NewIntake {
    pub fn from_item(
        user_id: &str,
        date: NaiveDate,
        meal_type: MealType,
        item: &NutritionItem,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            date,
            meal_type,
            item_name: item.name.clone(),
            calories: item.calories,
            carbs: item.carbs,
            protein: item.protein,
            fat: item.fat,
            fiber: item.fiber,
        }
    }

    pub fn from_combination(
        user_id: &str,
        date: NaiveDate,
        meal_type: MealType,
        combo: &MealCombination,
    ) -> Self {
        Self::from_item(user_id, date, meal_type, &combo.to_item())
    }

    pub fn with_id(self, id: u64) -> IntakeRecord {
        IntakeRecord {
            id,
            user_id: self.user_id,
            date: self.date,
            meal_type: self.meal_type,
            item_name: self.item_name,
            calories: self.calories,
            carbs: self.carbs,
            protein: self.protein,
            fat: self.fat,
            fiber: self.fiber,
        }
    }
}
