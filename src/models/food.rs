// ABOUTME: Food record and read-only food-composition table
// ABOUTME: Nutrient values are per 100 grams; untracked document keys are dropped on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Food-composition table.
//!
//! The table is loaded once and never mutated by the engine. Each record
//! carries a per-100g nutrient profile keyed by [`NutrientKey`]; a key the
//! record does not carry is unknown and contributes zero to aggregation.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::PlanResult;
use crate::nutrients::NutrientKey;

/// One row of the fixed composition table
///
/// Source documents may carry untracked keys (such as `energy_kj`) or
/// non-numeric placeholders for trace amounts; both are dropped when the
/// record is deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Unique identifier within the table
    pub id: u32,
    /// Human-readable description
    pub description: String,
    /// Nutrient values per 100 g; absent means unknown
    #[serde(default, deserialize_with = "deserialize_nutrients")]
    pub nutrients: BTreeMap<NutrientKey, f64>,
}

impl Food {
    /// Numeric value per 100 g for a nutrient, if the record carries one
    #[must_use]
    pub fn nutrient(&self, key: NutrientKey) -> Option<f64> {
        self.nutrients.get(&key).copied()
    }
}

/// Tolerant nutrient-map deserializer
///
/// Keeps only keys that name a tracked nutrient with a numeric value.
fn deserialize_nutrients<'de, D>(deserializer: D) -> Result<BTreeMap<NutrientKey, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| Some((NutrientKey::from_key(&key)?, value.as_f64()?)))
        .collect())
}

/// Read-only collection of food records with id lookup
#[derive(Debug, Clone, Default)]
pub struct FoodTable {
    foods: HashMap<u32, Food>,
}

impl FoodTable {
    /// Build a table from a list of records
    ///
    /// If two records share an id the later one wins.
    #[must_use]
    pub fn new(foods: Vec<Food>) -> Self {
        Self {
            foods: foods.into_iter().map(|food| (food.id, food)).collect(),
        }
    }

    /// Parse a table from a JSON array of food records
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanError::Json`] if the document is not a valid
    /// array of food records.
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let foods: Vec<Food> = serde_json::from_str(json)?;
        Ok(Self::new(foods))
    }

    /// Resolve a food by identifier
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Food> {
        self.foods.get(&id)
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Iterate over all records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.values()
    }
}
