use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{BodyCompositionProfile, Gender, Progress};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Percentage of the planned weight change achieved so far, clamped to 0-100.
///
/// `None` when the start and target weights are equal (nothing to progress
/// through).
pub fn weight_progress_pct(
    start_weight_kg: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
) -> Option<f64> {
    let total_change = start_weight_kg - target_weight_kg;
    if total_change == 0.0 || !total_change.is_finite() {
        return None;
    }
    let achieved = start_weight_kg - current_weight_kg;
    Some((achieved / total_change * 100.0).clamp(0.0, 100.0))
}

/// Percentage of the timeline elapsed, clamped to 0-100. Zero when `days_to_goal` is 0.
pub fn timeline_progress_pct(days_elapsed: u32, days_to_goal: u32) -> f64 {
    if days_to_goal == 0 {
        return 0.0;
    }
    (days_elapsed as f64 / days_to_goal as f64 * 100.0).clamp(0.0, 100.0)
}

/// Whole days between two instants, rounded up.
pub fn days_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let ms = (now - start).num_milliseconds().abs();
    let days = (ms + MS_PER_DAY - 1) / MS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Progress for a profile whose plan started at `start_weight_kg`.
pub fn compute_progress(
    profile: &BodyCompositionProfile,
    start_weight_kg: f64,
    days_elapsed: u32,
) -> Progress {
    Progress {
        weight_progress_pct: weight_progress_pct(
            start_weight_kg,
            profile.current_weight_kg,
            profile.target_weight_kg,
        ),
        timeline_progress_pct: timeline_progress_pct(days_elapsed, profile.days_to_goal),
        days_elapsed,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Acceptable,
    Obese,
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Acceptable => "Acceptable",
            BodyFatCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Exclusive upper bounds (body fat %) for each band below Obese.
const MALE_BODY_FAT_BANDS: [(f64, BodyFatCategory); 4] = [
    (6.0, BodyFatCategory::EssentialFat),
    (14.0, BodyFatCategory::Athletes),
    (18.0, BodyFatCategory::Fitness),
    (25.0, BodyFatCategory::Acceptable),
];

const FEMALE_BODY_FAT_BANDS: [(f64, BodyFatCategory); 4] = [
    (14.0, BodyFatCategory::EssentialFat),
    (21.0, BodyFatCategory::Athletes),
    (25.0, BodyFatCategory::Fitness),
    (32.0, BodyFatCategory::Acceptable),
];

pub fn body_fat_category(body_fat_pct: f64, gender: Gender) -> BodyFatCategory {
    let bands = match gender {
        Gender::Male => &MALE_BODY_FAT_BANDS,
        Gender::Female => &FEMALE_BODY_FAT_BANDS,
    };
    bands
        .iter()
        .find(|(upper, _)| body_fat_pct < *upper)
        .map(|(_, category)| *category)
        .unwrap_or(BodyFatCategory::Obese)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InBodyScoreCategory {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl fmt::Display for InBodyScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InBodyScoreCategory::Excellent => "Excellent",
            InBodyScoreCategory::Good => "Good",
            InBodyScoreCategory::Fair => "Fair",
            InBodyScoreCategory::NeedsImprovement => "Needs Improvement",
        };
        f.write_str(label)
    }
}

pub fn inbody_score_category(score: u8) -> InBodyScoreCategory {
    match score {
        80.. => InBodyScoreCategory::Excellent,
        70..=79 => InBodyScoreCategory::Good,
        60..=69 => InBodyScoreCategory::Fair,
        _ => InBodyScoreCategory::NeedsImprovement,
    }
}
