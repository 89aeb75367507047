// ABOUTME: Integration tests for file-backed plan persistence
// ABOUTME: Covers save/replace, load, list ordering, delete, and legacy document import
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use chrono::Duration;
use nutriplan::errors::PlanError;
use nutriplan::measurements::MeasurementUnit;
use nutriplan::models::{GoalDirection, MealPlan};
use nutriplan::storage::PlanStore;

fn temp_store() -> (tempfile::TempDir, PlanStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("plans.json"));
    (dir, store)
}

#[test]
fn test_missing_store_reads_empty() {
    let (_dir, store) = temp_store();
    assert!(store.list_plans().unwrap().is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let (_dir, store) = temp_store();
    let plan = MealPlan::new("Reeducation week 1");
    store.save_plan(&plan).unwrap();

    let loaded = store.load_plan(&plan.id).unwrap();
    assert_eq!(loaded.name, "Reeducation week 1");
    assert_eq!(loaded.created_at, plan.created_at);
}

#[test]
fn test_save_replaces_plan_with_same_id() {
    let (_dir, store) = temp_store();
    let mut plan = MealPlan::new("v1");
    store.save_plan(&plan).unwrap();

    plan.name = "v2".to_owned();
    plan.touch();
    store.save_plan(&plan).unwrap();

    let summaries = store.list_plans().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "v2");
}

#[test]
fn test_list_orders_by_update_time_descending() {
    let (_dir, store) = temp_store();
    let mut old = MealPlan::new("old");
    old.updated_at = old.updated_at - Duration::days(3);
    let recent = MealPlan::new("recent");
    store.save_plan(&old).unwrap();
    store.save_plan(&recent).unwrap();

    let names: Vec<String> = store
        .list_plans()
        .unwrap()
        .into_iter()
        .map(|summary| summary.name)
        .collect();
    assert_eq!(names, vec!["recent".to_owned(), "old".to_owned()]);
}

#[test]
fn test_delete_removes_only_target() {
    let (_dir, store) = temp_store();
    let keep = MealPlan::new("keep");
    let drop = MealPlan::new("drop");
    store.save_plan(&keep).unwrap();
    store.save_plan(&drop).unwrap();

    store.delete_plan(&drop.id).unwrap();
    let summaries = store.list_plans().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, keep.id);

    assert!(matches!(
        store.delete_plan(&drop.id),
        Err(PlanError::PlanNotFound(_))
    ));
}

#[test]
fn test_load_unknown_id_is_not_found() {
    let (_dir, store) = temp_store();
    store.save_plan(&MealPlan::new("only")).unwrap();
    assert!(matches!(
        store.load_plan("nope"),
        Err(PlanError::PlanNotFound(_))
    ));
}

#[test]
fn test_malformed_store_surfaces_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = PlanStore::new(path);
    assert!(matches!(store.list_plans(), Err(PlanError::Json(_))));
}

// Documents exported by the original web application import unchanged:
// camelCase fields, ISO-8601 timestamps, goal maps keyed by nutrient.
#[test]
fn test_legacy_document_imports() {
    let document = r#"{
        "id": "4f1c2a9e-0001-4d2b-9c5e-aaaaaaaaaaaa",
        "name": "Plano semanal",
        "nutritionist": {"name": "Ana Souza", "license": "CRN 12345"},
        "patient": {"name": "J. Silva", "age": 34, "gender": "F"},
        "meals": [
            {"id": "m1", "name": "Café da manhã", "items": [
                {"foodId": 12, "quantity": 2.0, "unit": "fatia"},
                {"foodId": 7, "quantity": 1.0, "unit": "american_cup"}
            ]}
        ],
        "goals": {
            "energy": {"type": "max", "value": 2200.0, "tolerance": 5.0},
            "fiber": {"type": "min", "value": 25.0, "tolerance": 10.0}
        },
        "createdAt": "2025-03-14T12:00:00Z",
        "updatedAt": "2025-03-20T08:30:00Z"
    }"#;

    let plan: MealPlan = serde_json::from_str(document).unwrap();
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(plan.meals[0].items.len(), 2);
    // Legacy Portuguese tags map to their table units, not the fallback
    assert_eq!(plan.meals[0].items[0].unit, MeasurementUnit::Slice);
    assert_eq!(plan.meals[0].items[1].unit, MeasurementUnit::AmericanCup);
    assert_eq!(plan.goals.len(), 2);
    assert_eq!(
        plan.goals[&nutriplan::nutrients::NutrientKey::Energy].direction,
        GoalDirection::Max
    );
    assert_eq!(plan.created_at.to_rfc3339(), "2025-03-14T12:00:00+00:00");
}

// A legacy-tagged item must aggregate with its original gram ratio, not the
// already-grams fallback: two 30 g slices of a 300 kcal/100 g food are
// 180 kcal, not 6.
#[test]
fn test_legacy_unit_tags_keep_gram_ratios_in_aggregation() {
    use nutriplan::engine::aggregate_meal;
    use nutriplan::models::FoodTable;
    use nutriplan::nutrients::NutrientKey;

    let table = FoodTable::from_json(
        r#"[{"id": 12, "description": "Bread, french roll",
             "nutrients": {"energy": 300.0}}]"#,
    )
    .unwrap();
    let meal: nutriplan::models::Meal = serde_json::from_str(
        r#"{"id": "m1", "name": "Café da manhã",
            "items": [{"foodId": 12, "quantity": 2.0, "unit": "fatia"}]}"#,
    )
    .unwrap();

    let totals = aggregate_meal(&table, &meal);
    assert!(
        (totals[&NutrientKey::Energy] - 180.0).abs() < 1e-9,
        "expected 180 kcal from 2 slices, got {}",
        totals[&NutrientKey::Energy]
    );
}
