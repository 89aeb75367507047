// ABOUTME: Data model for the food-composition table and meal plans
// ABOUTME: Re-exports food and plan types for library consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Food table and meal plan data model.

/// Food records and the read-only composition table
pub mod food;
/// Meals, goals, metadata, and the plan document
pub mod plan;

pub use food::{Food, FoodTable};
pub use plan::{
    Gender, GoalDirection, Goals, Meal, MealItem, MealPlan, NutritionalGoal, NutritionistInfo,
    PatientInfo, SavedPlanSummary,
};
