/// Energy stored in one kg of body fat (kcal).
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Mifflin-St Jeor sex offsets (kcal).
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Deficit safety
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute ceiling on a safe daily deficit (kcal).
pub const MAX_SAFE_DEFICIT_KCAL: f64 = 1000.0;

/// Ceiling on a safe daily deficit as a fraction of TDEE.
pub const MAX_SAFE_DEFICIT_TDEE_FRACTION: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Macro targets
// ─────────────────────────────────────────────────────────────────────────────

/// Protein grams per kg of lean body mass.
pub const PROTEIN_G_PER_KG_LBM: f64 = 2.2;

/// Share of the daily budget taken by fat.
pub const FAT_BUDGET_FRACTION: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal allocation and selection
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the post-breakfast budget given to lunch; dinner takes the rest.
pub const LUNCH_SHARE: f64 = 0.4;
pub const DINNER_SHARE: f64 = 0.6;

/// Default maximum distance from a meal target (kcal).
pub const DEFAULT_TOLERANCE_KCAL: f64 = 100.0;

/// Default number of lunch/dinner recommendations.
pub const DEFAULT_MEAL_COUNT: usize = 3;

/// Café items may exceed the breakfast target by this much (kcal).
pub const BREAKFAST_SLACK_KCAL: f64 = 100.0;

/// Number of café items suggested for breakfast.
pub const BREAKFAST_COUNT: usize = 6;

/// Share of the daily budget used as the breakfast target when none is given.
pub const DEFAULT_BREAKFAST_SHARE: f64 = 0.3;

/// Round to the nearest integer, halves upward.
#[inline]
pub fn round_kcal(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves upward.
#[inline]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_kcal_halves_up() {
        assert_eq!(round_kcal(1724.75), 1725.0);
        assert_eq!(round_kcal(2.5), 3.0);
        assert_eq!(round_kcal(-2.5), -2.0);
        assert_eq!(round_kcal(-2.6), -3.0);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(7.548), 7.5);
        assert_eq!(round_tenth(54.112), 54.1);
        assert_eq!(round_tenth(54.06), 54.1);
    }

    #[test]
    fn test_meal_shares_cover_remaining() {
        assert!((LUNCH_SHARE + DINNER_SHARE - 1.0).abs() < 1e-12);
    }
}
