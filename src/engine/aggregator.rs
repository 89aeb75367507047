// ABOUTME: Sums tracked nutrients over meal items, scaled from per-100g table values
// ABOUTME: Unknown food ids are skipped; unknown units fall back to grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Nutrient aggregation.
//!
//! Every tracked nutrient accumulates from zero. Per item, the quantity is
//! converted to grams and the food's per-100g values are scaled by
//! `grams / 100`. An item whose food id does not resolve in the table is
//! skipped entirely; the skip is logged at debug level but never surfaced.

use std::collections::BTreeMap;

use crate::measurements::convert_to_grams;
use crate::models::{FoodTable, Meal, MealItem};
use crate::nutrients::NutrientKey;

/// Aggregated amounts keyed by tracked nutrient
pub type NutrientTotals = BTreeMap<NutrientKey, f64>;

/// Zero-initialized totals over every tracked nutrient key
fn zero_totals() -> NutrientTotals {
    NutrientKey::ALL.iter().map(|key| (*key, 0.0)).collect()
}

/// Sum tracked nutrients over a list of items
#[must_use]
pub fn aggregate_items(table: &FoodTable, items: &[MealItem]) -> NutrientTotals {
    let mut totals = zero_totals();
    for item in items {
        let Some(food) = table.get(item.food_id) else {
            tracing::debug!(food_id = item.food_id, "unknown food id, skipping item");
            continue;
        };
        let grams = convert_to_grams(item.quantity, item.unit);
        let multiplier = grams / 100.0;
        for (key, value) in &food.nutrients {
            if let Some(total) = totals.get_mut(key) {
                *total += value * multiplier;
            }
        }
    }
    totals
}

/// Sum tracked nutrients over one meal
#[must_use]
pub fn aggregate_meal(table: &FoodTable, meal: &Meal) -> NutrientTotals {
    aggregate_items(table, &meal.items)
}

/// Key-wise sum of [`aggregate_meal`] over every meal
///
/// Order-independent: any partition of the same items into meals yields the
/// same totals up to floating-point rounding.
#[must_use]
pub fn aggregate_plan(table: &FoodTable, meals: &[Meal]) -> NutrientTotals {
    let mut totals = zero_totals();
    for meal in meals {
        for (key, value) in aggregate_meal(table, meal) {
            if let Some(total) = totals.get_mut(&key) {
                *total += value;
            }
        }
    }
    totals
}
