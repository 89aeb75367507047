// ABOUTME: Renders a meal plan as a semicolon-separated CSV document
// ABOUTME: Sections: plan header, contacts, goals, meals, totals, unit legend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! CSV export.
//!
//! The separator is a semicolon so descriptions containing commas survive
//! spreadsheet import without quoting. Values are rounded to whole display
//! units, matching the on-screen summary.

use crate::engine::{aggregate_items, aggregate_plan};
use crate::measurements::MeasurementUnit;
use crate::models::{FoodTable, MealPlan};
use crate::nutrients::NutrientKey;

const SEPARATOR: char = ';';

/// Render a plan as a CSV document
#[must_use]
pub fn plan_to_csv(table: &FoodTable, plan: &MealPlan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("NutriPlan Export".to_owned());
    lines.push(format!("Plan Name{SEPARATOR}{}", plan.name));
    lines.push(format!(
        "Created{SEPARATOR}{}",
        plan.created_at.format("%Y-%m-%d")
    ));
    lines.push(format!(
        "Last Updated{SEPARATOR}{}",
        plan.updated_at.format("%Y-%m-%d")
    ));
    lines.push(String::new());

    push_contact_section(&mut lines, plan);
    push_goals_section(&mut lines, plan);
    push_meal_sections(&mut lines, table, plan);
    push_totals_section(&mut lines, table, plan);
    push_unit_legend(&mut lines);

    lines.join("\n")
}

fn push_contact_section(lines: &mut Vec<String>, plan: &MealPlan) {
    if plan.nutritionist.is_none() && plan.patient.is_none() {
        return;
    }
    lines.push("Professional and Patient Information".to_owned());
    if let Some(nutritionist) = &plan.nutritionist {
        lines.push(format!("Nutritionist Name{SEPARATOR}{}", nutritionist.name));
        lines.push(format!("License{SEPARATOR}{}", nutritionist.license));
        if let Some(email) = &nutritionist.email {
            lines.push(format!("Email{SEPARATOR}{email}"));
        }
        if let Some(phone) = &nutritionist.phone {
            lines.push(format!("Phone{SEPARATOR}{phone}"));
        }
    }
    if let Some(patient) = &plan.patient {
        lines.push(format!("Patient Name{SEPARATOR}{}", patient.name));
        if let Some(age) = patient.age {
            lines.push(format!("Age{SEPARATOR}{age}"));
        }
        if let Some(gender) = patient.gender {
            lines.push(format!("Gender{SEPARATOR}{}", gender.label()));
        }
        if let Some(height) = patient.height {
            lines.push(format!("Height{SEPARATOR}{height} cm"));
        }
        if let Some(weight) = patient.weight {
            lines.push(format!("Weight{SEPARATOR}{weight} kg"));
        }
    }
    lines.push(String::new());
}

fn push_goals_section(lines: &mut Vec<String>, plan: &MealPlan) {
    lines.push("Nutritional Goals".to_owned());
    lines.push(format!("Nutrient{SEPARATOR}Target{SEPARATOR}Tolerance"));
    for (nutrient, goal) in &plan.goals {
        lines.push(format!(
            "{}{SEPARATOR}{} {}{}{SEPARATOR}±{}%",
            nutrient.label(),
            goal.direction.glyph(),
            goal.target,
            nutrient.display_unit(),
            goal.tolerance
        ));
    }
    lines.push(String::new());
}

fn push_meal_sections(lines: &mut Vec<String>, table: &FoodTable, plan: &MealPlan) {
    for meal in &plan.meals {
        lines.push(meal.name.clone());
        lines.push(format!(
            "Food{SEPARATOR}Portion{SEPARATOR}Energy{SEPARATOR}Protein{SEPARATOR}Carbohydrates{SEPARATOR}Lipids"
        ));
        for item in &meal.items {
            let Some(food) = table.get(item.food_id) else {
                continue;
            };
            let nutrients = aggregate_items(table, std::slice::from_ref(item));
            lines.push(format!(
                "{}{SEPARATOR}{} {}{SEPARATOR}{} kcal{SEPARATOR}{} g{SEPARATOR}{} g{SEPARATOR}{} g",
                food.description,
                item.quantity,
                item.unit.label(),
                nutrients[&NutrientKey::Energy].round(),
                nutrients[&NutrientKey::Protein].round(),
                nutrients[&NutrientKey::Carbohydrates].round(),
                nutrients[&NutrientKey::Lipids].round(),
            ));
        }
        lines.push(String::new());
    }
}

fn push_totals_section(lines: &mut Vec<String>, table: &FoodTable, plan: &MealPlan) {
    lines.push("Total Nutrition Summary".to_owned());
    lines.push(format!("Nutrient{SEPARATOR}Actual{SEPARATOR}Goal"));
    let totals = aggregate_plan(table, &plan.meals);
    for (nutrient, goal) in &plan.goals {
        let actual = totals.get(nutrient).copied().unwrap_or(0.0);
        lines.push(format!(
            "{}{SEPARATOR}{}{}{SEPARATOR}{} {}{}",
            nutrient.label(),
            actual.round(),
            nutrient.display_unit(),
            goal.direction.glyph(),
            goal.target,
            nutrient.display_unit(),
        ));
    }
    lines.push(String::new());
}

fn push_unit_legend(lines: &mut Vec<String>) {
    lines.push("Measurement Unit Legend".to_owned());
    lines.push(format!("Unit{SEPARATOR}Grams per unit"));
    for unit in MeasurementUnit::ALL {
        // ALL excludes the fallback variant, so the ratio is always present
        if let Some(grams) = unit.grams_per_unit() {
            lines.push(format!("{}{SEPARATOR}{grams}", unit.label()));
        }
    }
}
