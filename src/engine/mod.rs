// ABOUTME: Nutrient aggregation and goal evaluation engine
// ABOUTME: Pure, synchronous, stateless; never raises an error to its caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! The aggregation and evaluation engine.
//!
//! Aggregation reduces meals to per-nutrient totals scaled from the
//! per-100g table values; evaluation classifies totals against configured
//! goals. Both halves are pure functions over snapshots of the plan state:
//! re-invoking the pipeline on every state change is safe and yields
//! consistent results for identical inputs.

/// Per-meal and per-plan nutrient totals
pub mod aggregator;
/// Tri-state goal classification and the nutrition summary
pub mod evaluator;

pub use aggregator::{aggregate_items, aggregate_meal, aggregate_plan, NutrientTotals};
pub use evaluator::{classify, summarize, summarize_plan, GoalStatus, NutrientStatus, NutritionSummary};
