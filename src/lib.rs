pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod store;

pub use catalog::Catalog;
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{BodyCompositionProfile, EnergyBudget, MealCombination, NutritionItem};
