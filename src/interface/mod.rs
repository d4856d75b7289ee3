pub mod prompts;
pub mod render;

pub use prompts::{prompt_breakfast, prompt_profile, prompt_yes_no};
pub use render::{
    display_breakfast_options, display_day_plan, display_energy_budget, display_intake,
    display_meal_budgets, display_meal_options, display_progress,
};
