// ABOUTME: Classifies aggregated nutrient totals against configured goals
// ABOUTME: Tri-state compliance with an inclusive tolerance boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Goal evaluation.
//!
//! Boundary policy: equality to the target always counts as success,
//! regardless of direction; equality to the tolerance edge counts as
//! warning, not error. The warning band is the closed interval between the
//! target and the tolerance edge on the violating side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregator::{aggregate_plan, NutrientTotals};
use crate::models::{FoodTable, GoalDirection, Goals, MealPlan, NutritionalGoal};
use crate::nutrients::NutrientKey;

/// Tri-state compliance status of a nutrient against its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// The goal is met
    Success,
    /// Inside the tolerance band
    Warning,
    /// Outside the tolerance band
    Error,
}

impl GoalStatus {
    /// The wire/display form: exactly `success`, `warning`, or `error`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an aggregated value against a goal
#[must_use]
pub fn classify(actual: f64, goal: &NutritionalGoal) -> GoalStatus {
    let tolerance_abs = goal.target * (goal.tolerance / 100.0);
    match goal.direction {
        GoalDirection::Min => {
            if actual >= goal.target {
                GoalStatus::Success
            } else if actual >= goal.target - tolerance_abs {
                GoalStatus::Warning
            } else {
                GoalStatus::Error
            }
        }
        GoalDirection::Max => {
            if actual <= goal.target {
                GoalStatus::Success
            } else if actual <= goal.target + tolerance_abs {
                GoalStatus::Warning
            } else {
                GoalStatus::Error
            }
        }
    }
}

/// One derived summary entry; recomputed on every read, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientStatus {
    /// Aggregated value
    pub value: f64,
    /// Goal target
    pub target: f64,
    /// Goal tolerance, percent of target
    pub tolerance: f64,
    /// Goal direction
    #[serde(rename = "type")]
    pub direction: GoalDirection,
    /// Derived compliance status
    pub status: GoalStatus,
}

/// Derived per-nutrient comparison of totals against goals
pub type NutritionSummary = BTreeMap<NutrientKey, NutrientStatus>;

/// Build a summary entry for every configured goal
///
/// Only keys present in `goals` are evaluated; a nutrient absent from
/// `totals` reads as zero.
#[must_use]
pub fn summarize(totals: &NutrientTotals, goals: &Goals) -> NutritionSummary {
    goals
        .iter()
        .map(|(key, goal)| {
            let value = totals.get(key).copied().unwrap_or(0.0);
            (
                *key,
                NutrientStatus {
                    value,
                    target: goal.target,
                    tolerance: goal.tolerance,
                    direction: goal.direction,
                    status: classify(value, goal),
                },
            )
        })
        .collect()
}

/// Aggregate a whole plan and evaluate it against the plan's goals
#[must_use]
pub fn summarize_plan(table: &FoodTable, plan: &MealPlan) -> NutritionSummary {
    summarize(&aggregate_plan(table, &plan.meals), &plan.goals)
}
