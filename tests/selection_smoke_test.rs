use std::collections::BTreeMap;

use ns_nutrition_rs::catalog::Catalog;
use ns_nutrition_rs::config::PlannerConfig;
use ns_nutrition_rs::models::{
    Day, DayMenu, MealOption, MealType, NutritionItem, ProteinGroup, ProteinKind,
};
use ns_nutrition_rs::planner::{
    ExtrasPolicy, build_combinations, build_combinations_with, combination_count, plan_day,
    plan_week, select_breakfast, select_meals,
};

fn item(name: &str, cal: f64, protein: f64) -> NutritionItem {
    NutritionItem::new(name, cal, cal * 0.1, protein, cal * 0.03, 2.0)
}

/// A one-day catalog: 2 bases × (1 + 1) proteins × 1 veggie.
fn small_catalog() -> Catalog {
    let lunch = MealOption {
        base: vec![item("Rice", 200.0, 4.0), item("Quinoa", 250.0, 8.0)],
        proteins: vec![
            ProteinGroup {
                kind: ProteinKind::Vegan,
                items: vec![item("Tofu", 150.0, 15.0)],
            },
            ProteinGroup {
                kind: ProteinKind::NonVegan,
                items: vec![item("Chicken", 220.0, 30.0)],
            },
        ],
        veggies: vec![item("Greens", 50.0, 2.0)],
        extras: Vec::new(),
    };

    let mut week = BTreeMap::new();
    week.insert(
        Day::Monday,
        DayMenu {
            lunch: lunch.clone(),
            dinner: lunch,
        },
    );

    let cafe = vec![
        item("Oats", 300.0, 10.0),
        item("Omelette", 350.0, 24.0),
        item("Pancakes", 650.0, 12.0),
    ];
    Catalog::new(cafe, week).unwrap()
}

#[test]
fn test_builtin_week_plans_every_day() {
    let catalog = Catalog::builtin().unwrap();
    let config = PlannerConfig::default();
    let plans = plan_week(&catalog, 1928.0, 350.0, &config);

    assert_eq!(plans.len(), 7);
    for plan in &plans {
        assert_eq!(plan.lunch.len(), config.meal_count, "{} lunch", plan.day);
        assert_eq!(plan.dinner.len(), config.meal_count, "{} dinner", plan.day);

        for options in [&plan.lunch, &plan.dinner] {
            let flagged = options.iter().filter(|c| c.over_budget).count();
            assert!(flagged == 0 || flagged == options.len());
        }
    }
}

#[test]
fn test_builtin_cardinality_matches_groups() {
    let catalog = Catalog::builtin().unwrap();
    for day in Day::ALL {
        for meal in [MealType::Lunch, MealType::Dinner] {
            let option = catalog.meal(day, meal).unwrap();
            let expected = option.base.len()
                * (option.protein(ProteinKind::NonVegan).count()
                    + option.protein(ProteinKind::Vegan).count()
                    + option.protein(ProteinKind::Vegetarian).count())
                * option.veggies.len();

            assert_eq!(build_combinations(option).len(), expected, "{} {}", day, meal);
            assert_eq!(combination_count(option, ExtrasPolicy::CoreOnly), expected);
            assert_eq!(
                build_combinations_with(option, ExtrasPolicy::AllGroups).len(),
                combination_count(option, ExtrasPolicy::AllGroups)
            );
        }
    }
}

#[test]
fn test_substitute_catalog_ranking() {
    let catalog = small_catalog();
    let config = PlannerConfig::default();

    // 1928 - 328 = 1600 left; lunch 640, dinner 960
    let plan = plan_day(&catalog, Day::Monday, 1928.0, 328.0, &config);
    assert_eq!(plan.budgets.lunch_kcal, 640.0);
    assert_eq!(plan.budgets.dinner_kcal, 960.0);

    // Combos are 470, 400, 520 and 450 kcal; none is within 100 of 640.
    assert_eq!(plan.lunch.len(), 3);
    assert!(plan.lunch.iter().all(|c| c.over_budget));
    assert_eq!(plan.lunch[0].name, "Quinoa + Chicken + Greens");
    assert_eq!(plan.lunch[0].calories, 520.0);

    assert!(plan.dinner.iter().all(|c| c.over_budget));
}

#[test]
fn test_substitute_catalog_within_tolerance() {
    let catalog = small_catalog();
    let option = catalog.meal(Day::Monday, MealType::Lunch).unwrap();
    let combos = build_combinations(option);
    assert_eq!(combos.len(), 4);

    // 470 and 450 are both 10 away; 400 and 520 are outside the tolerance
    let picks = select_meals(&combos, 460.0, 50.0, 3);
    let names: Vec<&str> = picks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rice + Chicken + Greens", "Quinoa + Tofu + Greens"]);
    assert!(picks.iter().all(|c| !c.over_budget));
}

#[test]
fn test_missing_day_yields_no_meals() {
    let catalog = small_catalog();
    let plan = plan_day(&catalog, Day::Sunday, 2000.0, 0.0, &PlannerConfig::default());
    assert!(plan.lunch.is_empty());
    assert!(plan.dinner.is_empty());
}

#[test]
fn test_breakfast_from_cafe() {
    let catalog = small_catalog();
    let picks = select_breakfast(catalog.cafe_items(), 300.0, 100.0, 6);
    let names: Vec<&str> = picks.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Omelette", "Oats"]);

    let builtin = Catalog::builtin().unwrap();
    let picks = select_breakfast(builtin.cafe_items(), 400.0, 100.0, 6);
    assert!(picks.len() <= 6);
    assert!(picks.iter().all(|i| i.calories <= 500.0));
    assert!(picks.windows(2).all(|w| w[0].protein >= w[1].protein));
}
