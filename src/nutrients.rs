// ABOUTME: Static catalog of the nutrient keys tracked by the aggregation engine
// ABOUTME: Maps each key to its display label and fixed presentation unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Tracked nutrient keys.
//!
//! The composition table reports values per 100 g of food. The set of
//! tracked keys is declared statically here and shared by the food schema,
//! the aggregator, and the evaluator. Energy in kilojoules is deliberately
//! absent: the table carries it, but only the kilocalorie figure is
//! tracked.

use serde::{Deserialize, Serialize};

/// A nutrient tracked by the aggregation engine
///
/// Serializes to its `snake_case` key, which is also the key used in food
/// documents and goal maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    /// Water content (g per 100 g)
    Humidity,
    /// Energy (kcal per 100 g)
    Energy,
    /// Protein (g per 100 g)
    Protein,
    /// Total lipids (g per 100 g)
    Lipids,
    /// Cholesterol (mg per 100 g)
    Cholesterol,
    /// Carbohydrates (g per 100 g)
    Carbohydrates,
    /// Dietary fiber (g per 100 g)
    Fiber,
    /// Ash residue (g per 100 g)
    Ashes,
    /// Calcium (mg per 100 g)
    Calcium,
    /// Magnesium (mg per 100 g)
    Magnesium,
    /// Manganese (mg per 100 g)
    Manganese,
    /// Phosphorus (mg per 100 g)
    Phosphorus,
    /// Iron (mg per 100 g)
    Iron,
    /// Sodium (mg per 100 g)
    Sodium,
    /// Potassium (mg per 100 g)
    Potassium,
    /// Copper (mg per 100 g)
    Copper,
    /// Zinc (mg per 100 g)
    Zinc,
    /// Retinol (µg per 100 g)
    Retinol,
    /// Retinol equivalent (µg per 100 g)
    Re,
    /// Retinol activity equivalent (µg per 100 g)
    Rae,
    /// Thiamine (mg per 100 g)
    Thiamine,
}

impl NutrientKey {
    /// Every tracked nutrient key, in catalog order
    pub const ALL: &'static [Self] = &[
        Self::Humidity,
        Self::Energy,
        Self::Protein,
        Self::Lipids,
        Self::Cholesterol,
        Self::Carbohydrates,
        Self::Fiber,
        Self::Ashes,
        Self::Calcium,
        Self::Magnesium,
        Self::Manganese,
        Self::Phosphorus,
        Self::Iron,
        Self::Sodium,
        Self::Potassium,
        Self::Copper,
        Self::Zinc,
        Self::Retinol,
        Self::Re,
        Self::Rae,
        Self::Thiamine,
    ];

    /// The `snake_case` key used in documents and exports
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Humidity => "humidity",
            Self::Energy => "energy",
            Self::Protein => "protein",
            Self::Lipids => "lipids",
            Self::Cholesterol => "cholesterol",
            Self::Carbohydrates => "carbohydrates",
            Self::Fiber => "fiber",
            Self::Ashes => "ashes",
            Self::Calcium => "calcium",
            Self::Magnesium => "magnesium",
            Self::Manganese => "manganese",
            Self::Phosphorus => "phosphorus",
            Self::Iron => "iron",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Copper => "copper",
            Self::Zinc => "zinc",
            Self::Retinol => "retinol",
            Self::Re => "re",
            Self::Rae => "rae",
            Self::Thiamine => "thiamine",
        }
    }

    /// Parse a document key into a tracked nutrient
    ///
    /// Returns `None` for untracked keys such as `energy_kj` or schema
    /// fields like `id` and `description`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|nutrient| nutrient.as_key() == key)
    }

    /// Human-readable display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Humidity => "Humidity",
            Self::Energy => "Energy",
            Self::Protein => "Protein",
            Self::Lipids => "Lipids",
            Self::Cholesterol => "Cholesterol",
            Self::Carbohydrates => "Carbohydrates",
            Self::Fiber => "Fiber",
            Self::Ashes => "Ashes",
            Self::Calcium => "Calcium",
            Self::Magnesium => "Magnesium",
            Self::Manganese => "Manganese",
            Self::Phosphorus => "Phosphorus",
            Self::Iron => "Iron",
            Self::Sodium => "Sodium",
            Self::Potassium => "Potassium",
            Self::Copper => "Copper",
            Self::Zinc => "Zinc",
            Self::Retinol => "Retinol",
            Self::Re => "Retinol equivalent",
            Self::Rae => "Retinol activity equivalent",
            Self::Thiamine => "Thiamine",
        }
    }

    /// Fixed presentation unit for this nutrient
    #[must_use]
    pub const fn display_unit(self) -> &'static str {
        match self {
            Self::Energy => "kcal",
            Self::Humidity => "%",
            Self::Protein | Self::Lipids | Self::Carbohydrates | Self::Fiber | Self::Ashes => "g",
            Self::Cholesterol
            | Self::Calcium
            | Self::Magnesium
            | Self::Manganese
            | Self::Phosphorus
            | Self::Iron
            | Self::Sodium
            | Self::Potassium
            | Self::Copper
            | Self::Zinc
            | Self::Thiamine => "mg",
            Self::Retinol | Self::Re | Self::Rae => "µg",
        }
    }
}
