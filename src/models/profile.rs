use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Self-reported training volume, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little to no exercise.
    Sedentary,
    /// Light exercise 1-3 days/week.
    LightlyActive,
    /// Moderate exercise 3-5 days/week.
    #[default]
    ModeratelyActive,
    /// Heavy exercise 6-7 days/week.
    VeryActive,
    /// Very heavy physical job or training.
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extra active",
        }
    }
}

/// Body-composition measurements and goal, as entered by the user.
///
/// Treated as immutable for the duration of a calculation pass; every derived
/// value is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionProfile {
    pub current_weight_kg: f64,
    pub current_body_fat_pct: f64,
    pub target_weight_kg: f64,
    pub target_body_fat_pct: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    pub days_to_goal: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeletal_muscle_mass_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_body_score: Option<u8>,
}

impl BodyCompositionProfile {
    /// Reject profiles the energy formulas cannot be evaluated on.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("current weight", self.current_weight_kg),
            ("target weight", self.target_weight_kg),
            ("height", self.height_cm),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlannerError::InvalidInput(format!(
                    "{} must be positive, got {}",
                    field, value
                )));
            }
        }

        let percentages = [
            ("current body fat", self.current_body_fat_pct),
            ("target body fat", self.target_body_fat_pct),
        ];
        for (field, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(PlannerError::InvalidInput(format!(
                    "{} must be within 0-100%, got {}",
                    field, value
                )));
            }
        }

        if self.age_years == 0 {
            return Err(PlannerError::InvalidInput("age must be positive".to_string()));
        }
        if self.days_to_goal == 0 {
            return Err(PlannerError::InvalidInput(
                "days to goal must be positive".to_string(),
            ));
        }
        if let Some(score) = self.in_body_score
            && score > 100
        {
            return Err(PlannerError::InvalidInput(format!(
                "InBody score must be within 0-100, got {}",
                score
            )));
        }
        if let Some(smm) = self.skeletal_muscle_mass_kg
            && smm < 0.0
        {
            return Err(PlannerError::InvalidInput(
                "skeletal muscle mass cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Fat mass in kg at the current measurement.
    #[inline]
    pub fn current_fat_mass_kg(&self) -> f64 {
        self.current_weight_kg * self.current_body_fat_pct / 100.0
    }

    /// Fat mass in kg at the goal.
    #[inline]
    pub fn target_fat_mass_kg(&self) -> f64 {
        self.target_weight_kg * self.target_body_fat_pct / 100.0
    }
}

/// A stored profile together with the baseline progress is measured from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub profile: BodyCompositionProfile,
    /// Weight when the plan started; progress is measured against it.
    pub start_weight_kg: f64,
    pub started_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Start a new plan from this profile at `now`.
    pub fn start(user_id: &str, profile: BodyCompositionProfile, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            start_weight_kg: profile.current_weight_kg,
            profile,
            started_at: now,
        }
    }
}
