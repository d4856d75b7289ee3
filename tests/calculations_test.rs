#[macro_use]
extern crate assert_float_eq;

use chrono::{Duration, TimeZone, Utc};

use ns_nutrition_rs::models::{ActivityLevel, BodyCompositionProfile, Gender, ProfileRecord};
use ns_nutrition_rs::planner::{
    compute_bmr, compute_daily_deficit, compute_energy_budget, compute_meal_budgets,
    compute_progress, compute_tdee, days_elapsed, is_deficit_safe, weight_progress_pct,
};
use ns_nutrition_rs::store::{JsonFileStore, ProfileStore};

fn profile() -> BodyCompositionProfile {
    BodyCompositionProfile {
        current_weight_kg: 71.2,
        current_body_fat_pct: 24.0,
        target_weight_kg: 63.6,
        target_body_fat_pct: 15.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::ModeratelyActive,
        days_to_goal: 90,
        skeletal_muscle_mass_kg: Some(30.1),
        in_body_score: Some(74),
    }
}

#[test]
fn test_worked_example_intermediates() {
    let p = profile();
    let bmr = compute_bmr(&p);
    assert_float_absolute_eq!(bmr, 1660.75, 1e-9);
    assert_float_absolute_eq!(compute_tdee(bmr, p.activity_level), 2574.1625, 1e-9);
    assert_float_absolute_eq!(compute_daily_deficit(&p), 58119.6 / 90.0, 1e-9);
}

#[test]
fn test_worked_example_budget() {
    let budget = compute_energy_budget(&profile()).unwrap();

    assert_eq!(budget.bmr_kcal, 1661.0);
    assert_eq!(budget.tdee_kcal, 2574.0);
    assert_eq!(budget.daily_deficit_kcal, 646.0);
    assert_eq!(budget.daily_budget_kcal, 1928.0);
    assert_eq!(budget.total_fat_loss_kg, 7.5);
    assert_eq!(budget.lean_body_mass_kg, 54.1);
    assert_eq!(budget.target_lean_body_mass_kg, 54.1);
    assert!(!budget.deficit_safe);
}

#[test]
fn test_longer_timeline_makes_deficit_safe() {
    let mut p = profile();
    p.days_to_goal = 120;
    let budget = compute_energy_budget(&p).unwrap();
    // 58119.6 / 120 = 484.33
    assert_eq!(budget.daily_deficit_kcal, 484.0);
    assert!(budget.deficit_safe);
}

#[test]
fn test_budget_rounds_after_subtracting() {
    let mut p = profile();
    p.current_weight_kg = 72.2;
    p.current_body_fat_pct = 25.0;
    p.target_weight_kg = 70.0;
    p.days_to_goal = 100;

    // TDEE 2589.6625, deficit 581.35, budget 2008.3125
    let budget = compute_energy_budget(&p).unwrap();
    assert_eq!(budget.tdee_kcal, 2590.0);
    assert_eq!(budget.daily_deficit_kcal, 581.0);
    assert_eq!(budget.daily_budget_kcal, 2008.0);
    assert_ne!(
        budget.daily_budget_kcal,
        budget.tdee_kcal - budget.daily_deficit_kcal
    );
}

#[test]
fn test_deficit_safety_limits() {
    // 25% of TDEE is the binding limit
    assert!(is_deficit_safe(2400.0, 600.0));
    assert!(!is_deficit_safe(2400.0, 601.0));
    // 1000 kcal is the binding limit
    assert!(is_deficit_safe(4800.0, 1000.0));
    assert!(!is_deficit_safe(4800.0, 1001.0));
    // A surplus is always safe
    assert!(is_deficit_safe(2000.0, -300.0));
}

#[test]
fn test_invalid_profiles_rejected() {
    let cases: [fn(&mut BodyCompositionProfile); 8] = [
        |p| p.current_weight_kg = 0.0,
        |p| p.target_weight_kg = -1.0,
        |p| p.height_cm = 0.0,
        |p| p.current_body_fat_pct = 101.0,
        |p| p.target_body_fat_pct = -0.5,
        |p| p.age_years = 0,
        |p| p.days_to_goal = 0,
        |p| p.in_body_score = Some(101),
    ];

    for mutate in cases {
        let mut p = profile();
        mutate(&mut p);
        assert!(compute_energy_budget(&p).is_err(), "{:?}", p);
    }
}

#[test]
fn test_meal_budgets_after_breakfast() {
    let budgets = compute_meal_budgets(2000.0, 500.0);
    assert_eq!(budgets.remaining_kcal, 1500.0);
    assert_eq!(budgets.lunch_kcal, 600.0);
    assert_eq!(budgets.dinner_kcal, 900.0);
    assert_eq!(budgets.lunch_kcal + budgets.dinner_kcal, budgets.remaining_kcal);

    let budgets = compute_meal_budgets(1928.0, 345.7);
    let diff = budgets.lunch_kcal + budgets.dinner_kcal - budgets.remaining_kcal;
    assert!(diff.abs() <= 1.0);
}

#[test]
fn test_budget_survives_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();

    let before = compute_energy_budget(&profile()).unwrap();
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .save_profile(ProfileRecord::start("alice", profile(), now))
            .unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let record = store.load_profile("alice").unwrap().unwrap();
    let after = compute_energy_budget(&record.profile).unwrap();

    assert_eq!(before, after);
    assert_eq!(
        serde_json::to_string(&before).unwrap(),
        serde_json::to_string(&after).unwrap()
    );
}

#[test]
fn test_weight_progress_monotonic() {
    let (start, target) = (71.2, 63.6);
    let mut last = 0.0;
    let mut weight = start;
    while weight >= target - 2.0 {
        let pct = weight_progress_pct(start, weight, target).unwrap();
        assert!(pct >= last, "{} < {} at {} kg", pct, last, weight);
        assert!((0.0..=100.0).contains(&pct));
        last = pct;
        weight -= 0.1;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn test_progress_over_time() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
    let mut p = profile();
    p.current_weight_kg = 67.4;

    let elapsed = days_elapsed(start, start + Duration::days(45));
    assert_eq!(elapsed, 45);

    let progress = compute_progress(&p, 71.2, elapsed);
    assert_float_absolute_eq!(progress.weight_progress_pct.unwrap(), 50.0, 1e-9);
    assert_float_absolute_eq!(progress.timeline_progress_pct, 50.0, 1e-9);

    // Partial days count as a whole day
    assert_eq!(days_elapsed(start, start + Duration::hours(1)), 1);
    assert_eq!(days_elapsed(start, start), 0);
}
