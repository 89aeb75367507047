// ABOUTME: Main library entry point for the NutriPlan meal planning engine
// ABOUTME: Exposes the nutrient aggregation, goal evaluation, and plan persistence APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![deny(unsafe_code)]

//! # NutriPlan
//!
//! Meal plan nutrient aggregation and goal evaluation for nutrition
//! professionals. A plan is a set of meals assembled from a fixed
//! food-composition table (values per 100 g); per-nutrient goals carry a
//! direction (minimum required or maximum allowed) and a tolerance band
//! expressed as a percentage of the target.
//!
//! The engine is pure and synchronous: aggregation reduces a plan to
//! per-nutrient totals, evaluation classifies each total against its goal
//! into `success`, `warning`, or `error`. It holds no state, performs no
//! I/O, and never returns an error; recoverable conditions (unknown food
//! id, unrecognized measurement unit) are handled by silent skip/fallback.
//!
//! ## Example
//!
//! ```rust
//! use nutriplan::engine::{aggregate_plan, summarize};
//! use nutriplan::models::{FoodTable, MealPlan};
//!
//! # fn demo(table: &FoodTable, plan: &MealPlan) {
//! let totals = aggregate_plan(table, &plan.meals);
//! let summary = summarize(&totals, &plan.goals);
//! for (nutrient, status) in &summary {
//!     println!("{}: {:?}", nutrient.label(), status.status);
//! }
//! # }
//! ```

/// Nutrient aggregation and goal evaluation engine
pub mod engine;

/// Library error types
pub mod errors;

/// CSV and plain-text plan export
pub mod export;

/// Household measurement units and gram conversion
pub mod measurements;

/// Food table and meal plan data model
pub mod models;

/// Static catalog of tracked nutrient keys
pub mod nutrients;

/// Built-in reference goal profiles
pub mod profiles;

/// File-backed meal plan persistence
pub mod storage;

pub use engine::{
    aggregate_meal, aggregate_plan, classify, summarize, summarize_plan, GoalStatus,
    NutrientStatus, NutrientTotals, NutritionSummary,
};
pub use errors::{PlanError, PlanResult};
pub use measurements::{convert_to_grams, MeasurementUnit};
pub use models::{
    Food, FoodTable, Gender, GoalDirection, Goals, Meal, MealItem, MealPlan, NutritionalGoal,
    NutritionistInfo, PatientInfo, SavedPlanSummary,
};
pub use nutrients::NutrientKey;
pub use profiles::GoalProfile;
pub use storage::PlanStore;
