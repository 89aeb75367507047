// ABOUTME: Integration tests for the aggregation and goal-evaluation engine
// ABOUTME: Covers empty meals, unit scaling, skips, associativity, and goal boundaries
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! End-to-end engine properties:
//! - zero-item meals aggregate to zero everywhere
//! - per-100g scaling through the unit table
//! - unknown food ids and unknown units never error
//! - plan aggregation is associative within floating-point tolerance
//! - goal boundary classification for both directions
//! - summary scoping to configured goals

use nutriplan::engine::{aggregate_meal, aggregate_plan, classify, summarize, GoalStatus};
use nutriplan::measurements::MeasurementUnit;
use nutriplan::models::{FoodTable, Meal, MealItem, NutritionalGoal};
use nutriplan::nutrients::NutrientKey;

const REL_TOLERANCE: f64 = 1e-9;

fn fixture_table() -> FoodTable {
    FoodTable::from_json(
        r#"[
            {"id": 1, "description": "Rice, white, cooked",
             "nutrients": {"energy": 128.0, "protein": 2.5, "lipids": 0.2,
                           "carbohydrates": 28.1, "fiber": 1.6, "sodium": 1.0}},
            {"id": 2, "description": "Beans, carioca, cooked",
             "nutrients": {"energy": 76.0, "protein": 4.8, "lipids": 0.5,
                           "carbohydrates": 13.6, "fiber": 8.5, "iron": 1.3}},
            {"id": 3, "description": "Cheese, minas",
             "nutrients": {"energy": 50.0, "protein": 17.4, "calcium": 579.0}}
        ]"#,
    )
    .unwrap()
}

fn meal_with(items: Vec<MealItem>) -> Meal {
    let mut meal = Meal::new("test meal");
    meal.items = items;
    meal
}

fn item(food_id: u32, quantity: f64, unit: MeasurementUnit) -> MealItem {
    MealItem {
        food_id,
        quantity,
        unit,
    }
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_zero_item_meal_aggregates_to_zero() {
    let totals = aggregate_meal(&fixture_table(), &meal_with(vec![]));
    for key in NutrientKey::ALL {
        assert_eq!(totals[key], 0.0, "{} should be zero", key.label());
    }
}

#[test]
fn test_unit_conversion_scales_per_100g_values() {
    // 2 portions (100 g each) of a 50 kcal/100g food => 50 * (200/100) = 100
    let totals = aggregate_meal(
        &fixture_table(),
        &meal_with(vec![item(3, 2.0, MeasurementUnit::Portion)]),
    );
    assert!(
        (totals[&NutrientKey::Energy] - 100.0).abs() < REL_TOLERANCE,
        "expected 100 kcal, got {}",
        totals[&NutrientKey::Energy]
    );
}

#[test]
fn test_unknown_food_id_is_skipped() {
    let valid = vec![item(1, 150.0, MeasurementUnit::Gram)];
    let mut with_invalid = valid.clone();
    with_invalid.push(item(424_242, 3.0, MeasurementUnit::Portion));

    let only_valid = aggregate_meal(&fixture_table(), &meal_with(valid));
    let with_skip = aggregate_meal(&fixture_table(), &meal_with(with_invalid));
    assert_eq!(only_valid, with_skip);
}

#[test]
fn test_unknown_unit_treated_as_grams() {
    let unit: MeasurementUnit = serde_json::from_str("\"punhado\"").unwrap();
    assert_eq!(unit, MeasurementUnit::Other);

    // 100 "already grams" of rice equals one 100 g portion
    let fallback = aggregate_meal(&fixture_table(), &meal_with(vec![item(1, 100.0, unit)]));
    let portion = aggregate_meal(
        &fixture_table(),
        &meal_with(vec![item(1, 1.0, MeasurementUnit::Portion)]),
    );
    assert_eq!(fallback, portion);
}

#[test]
fn test_plan_aggregation_is_associative() {
    let items = vec![
        item(1, 2.0, MeasurementUnit::Portion),
        item(2, 3.0, MeasurementUnit::ServingSpoon),
        item(3, 2.0, MeasurementUnit::Slice),
        item(1, 5.0, MeasurementUnit::Tablespoon),
    ];
    let table = fixture_table();
    let full = aggregate_meal(&table, &meal_with(items.clone()));

    // Every split point of the item list must sum to the same totals
    for split in 0..=items.len() {
        let (left, right) = items.split_at(split);
        let partitioned = aggregate_plan(
            &table,
            &[meal_with(left.to_vec()), meal_with(right.to_vec())],
        );
        for key in NutrientKey::ALL {
            let expected = full[key];
            let actual = partitioned[key];
            let scale = expected.abs().max(1.0);
            assert!(
                (expected - actual).abs() / scale < REL_TOLERANCE,
                "{} diverged at split {split}: {expected} vs {actual}",
                key.label()
            );
        }
    }
}

// ============================================================================
// Goal Boundary Tests
// ============================================================================

#[test]
fn test_max_goal_boundaries() {
    let goal = NutritionalGoal::max(100.0).with_tolerance(10.0);
    assert_eq!(classify(100.0, &goal), GoalStatus::Success);
    assert_eq!(classify(105.0, &goal), GoalStatus::Warning);
    assert_eq!(classify(110.0, &goal), GoalStatus::Warning, "closed boundary");
    assert_eq!(classify(110.01, &goal), GoalStatus::Error);
}

#[test]
fn test_min_goal_boundaries() {
    let goal = NutritionalGoal::min(50.0).with_tolerance(20.0);
    assert_eq!(classify(50.0, &goal), GoalStatus::Success);
    assert_eq!(classify(45.0, &goal), GoalStatus::Warning);
    assert_eq!(classify(40.0, &goal), GoalStatus::Warning, "closed boundary");
    assert_eq!(classify(39.99, &goal), GoalStatus::Error);
}

// ============================================================================
// Summary Scoping Tests
// ============================================================================

#[test]
fn test_summary_has_one_entry_per_goal() {
    let table = fixture_table();
    let totals = aggregate_meal(
        &table,
        &meal_with(vec![item(2, 2.0, MeasurementUnit::Portion)]),
    );

    let mut goals = nutriplan::models::Goals::new();
    goals.insert(NutrientKey::Fiber, NutritionalGoal::min(25.0).with_tolerance(40.0));
    goals.insert(NutrientKey::Retinol, NutritionalGoal::min(600.0));

    let summary = summarize(&totals, &goals);
    assert_eq!(summary.len(), goals.len());

    // 2 portions of beans carry 17 g fiber: inside the 15..25 warning band
    assert_eq!(summary[&NutrientKey::Fiber].status, GoalStatus::Warning);

    // No retinol anywhere in the table: evaluates as zero, not an error
    assert_eq!(summary[&NutrientKey::Retinol].value, 0.0);
    assert_eq!(summary[&NutrientKey::Retinol].status, GoalStatus::Error);

    // Aggregated nutrients without goals produce no entries
    assert!(!summary.contains_key(&NutrientKey::Energy));
    assert!(!summary.contains_key(&NutrientKey::Protein));
}
