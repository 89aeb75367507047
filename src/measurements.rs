// ABOUTME: Household measurement units with fixed grams-per-unit ratios
// ABOUTME: Converts (quantity, unit) pairs to grams for per-100g scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Measurement unit conversion.
//!
//! The unit set is fixed and not user-extensible. Volume-based measures
//! carry an assumed gram equivalent (e.g. a slice is taken as 30 g). A unit
//! tag that is not in the table converts as if the quantity were already in
//! grams; this fallback is silent and mirrors the goal engine's policy of
//! never surfacing an error.
//!
//! Documents written by the original application carry Portuguese unit tags
//! (`grama`, `fatia`, `copo_americano`, ...); each variant accepts its
//! legacy tag as a deserialization alias so those documents keep their gram
//! ratios on import.

use serde::{Deserialize, Serialize};

/// A household measurement unit with a fixed gram equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    /// 1 g
    #[default]
    #[serde(alias = "grama")]
    Gram,
    /// Standard portion, 100 g
    #[serde(alias = "porção", alias = "porcao")]
    Portion,
    /// Slice, assumed 30 g
    #[serde(alias = "fatia")]
    Slice,
    /// American cup, 180 mL
    #[serde(alias = "copo_americano")]
    AmericanCup,
    /// Double american cup, 250 mL
    #[serde(alias = "copo_duplo")]
    DoubleCup,
    /// Small ladle, 80 mL
    #[serde(alias = "concha_pequena")]
    SmallLadle,
    /// Medium ladle, 150 mL
    #[serde(alias = "concha_media")]
    MediumLadle,
    /// Serving spoon, 30 mL
    #[serde(alias = "colher_servir")]
    ServingSpoon,
    /// Tablespoon, 11 mL
    #[serde(alias = "colher_sopa")]
    Tablespoon,
    /// Dessert spoon, 9 mL
    #[serde(alias = "colher_sobremesa")]
    DessertSpoon,
    /// Teaspoon, 4 mL
    #[serde(alias = "colher_cha")]
    Teaspoon,
    /// Coffee spoon, 2 mL
    #[serde(alias = "colher_cafe")]
    CoffeeSpoon,
    /// Unrecognized unit tag; treated as already being in grams
    #[serde(other)]
    Other,
}

impl MeasurementUnit {
    /// Every convertible unit, in table order (excludes the fallback)
    pub const ALL: &'static [Self] = &[
        Self::Gram,
        Self::Portion,
        Self::Slice,
        Self::AmericanCup,
        Self::DoubleCup,
        Self::SmallLadle,
        Self::MediumLadle,
        Self::ServingSpoon,
        Self::Tablespoon,
        Self::DessertSpoon,
        Self::Teaspoon,
        Self::CoffeeSpoon,
    ];

    /// Gram equivalent of one unit, or `None` for unrecognized tags
    #[must_use]
    pub const fn grams_per_unit(self) -> Option<f64> {
        match self {
            Self::Gram => Some(1.0),
            Self::Portion => Some(100.0),
            Self::Slice | Self::ServingSpoon => Some(30.0),
            Self::AmericanCup => Some(180.0),
            Self::DoubleCup => Some(250.0),
            Self::SmallLadle => Some(80.0),
            Self::MediumLadle => Some(150.0),
            Self::Tablespoon => Some(11.0),
            Self::DessertSpoon => Some(9.0),
            Self::Teaspoon => Some(4.0),
            Self::CoffeeSpoon => Some(2.0),
            Self::Other => None,
        }
    }

    /// Display label for dropdowns and export legends
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gram => "Gram",
            Self::Portion => "Portion (100 g)",
            Self::Slice => "Slice (30 g)",
            Self::AmericanCup => "American cup (180 mL)",
            Self::DoubleCup => "Double cup (250 mL)",
            Self::SmallLadle => "Small ladle (80 mL)",
            Self::MediumLadle => "Medium ladle (150 mL)",
            Self::ServingSpoon => "Serving spoon (30 mL)",
            Self::Tablespoon => "Tablespoon (11 mL)",
            Self::DessertSpoon => "Dessert spoon (9 mL)",
            Self::Teaspoon => "Teaspoon (4 mL)",
            Self::CoffeeSpoon => "Coffee spoon (2 mL)",
            Self::Other => "Other",
        }
    }
}

/// Convert a quantity in the given unit to grams
///
/// An unrecognized unit returns the quantity unchanged (already-in-grams
/// fallback). Negative quantities are not rejected; they produce a negative
/// gram amount, which is the caller's responsibility.
#[must_use]
pub fn convert_to_grams(quantity: f64, unit: MeasurementUnit) -> f64 {
    unit.grams_per_unit()
        .map_or(quantity, |grams| quantity * grams)
}
