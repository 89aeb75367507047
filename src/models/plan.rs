// ABOUTME: Meal plan document model: meals, items, goals, and metadata
// ABOUTME: The plan is the unit of persistence, import, and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Meal plan model.
//!
//! A plan owns its meals and goals; the engine only reads them. Field names
//! serialize in camelCase and timestamps as ISO-8601 strings so documents
//! exported by earlier versions of the application import unchanged.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::measurements::MeasurementUnit;
use crate::nutrients::NutrientKey;

/// Direction of a nutritional goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    /// Minimum required intake
    Min,
    /// Maximum allowed intake
    Max,
}

impl GoalDirection {
    /// Comparison glyph used in exports (`>` for min, `<` for max)
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Min => '>',
            Self::Max => '<',
        }
    }
}

/// A per-nutrient target with direction and tolerance band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionalGoal {
    /// Whether the target is a floor or a ceiling
    #[serde(rename = "type")]
    pub direction: GoalDirection,
    /// Target value in the nutrient's display unit
    #[serde(rename = "value")]
    pub target: f64,
    /// Tolerance as a percentage of the target
    pub tolerance: f64,
}

impl NutritionalGoal {
    /// Minimum-required goal with no tolerance band
    #[must_use]
    pub const fn min(target: f64) -> Self {
        Self {
            direction: GoalDirection::Min,
            target,
            tolerance: 0.0,
        }
    }

    /// Maximum-allowed goal with no tolerance band
    #[must_use]
    pub const fn max(target: f64) -> Self {
        Self {
            direction: GoalDirection::Max,
            target,
            tolerance: 0.0,
        }
    }

    /// Same goal with the given tolerance percentage
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Goal map, at most one goal per nutrient key
pub type Goals = BTreeMap<NutrientKey, NutritionalGoal>;

/// One food reference within a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    /// Identifier in the food-composition table
    pub food_id: u32,
    /// Quantity in the given unit
    pub quantity: f64,
    /// Measurement unit of the quantity
    pub unit: MeasurementUnit,
}

/// A named, ordered group of food items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier within the plan
    pub id: String,
    /// Display name, free text
    pub name: String,
    /// Ordered items; may be empty for a newly created meal
    #[serde(default)]
    pub items: Vec<MealItem>,
}

impl Meal {
    /// New empty meal with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// Professional details attached to a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionistInfo {
    /// Full name
    pub name: String,
    /// Professional license number
    pub license: String,
    /// Contact e-mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Patient gender marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
    /// Other
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Patient details attached to a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    /// Full name
    pub name: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact e-mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Clinical observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

/// The unit of persistence, import, and export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Unique identifier
    pub id: String,
    /// Plan name
    pub name: String,
    /// Professional details, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritionist: Option<NutritionistInfo>,
    /// Patient details, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientInfo>,
    /// Meals in presentation order
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Per-nutrient goals
    #[serde(default)]
    pub goals: Goals,
    /// Creation timestamp (ISO-8601 in documents)
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (ISO-8601 in documents)
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    /// New empty plan with a fresh id and current timestamps
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            nutritionist: None,
            patient: None,
            meals: Vec::new(),
            goals: Goals::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the plan as updated now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Listing entry for a persisted plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlanSummary {
    /// Plan identifier
    pub id: String,
    /// Plan name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&MealPlan> for SavedPlanSummary {
    fn from(plan: &MealPlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
