// ABOUTME: Renders a meal plan as a plain-text report with compliance statuses
// ABOUTME: Mirrors the CSV sections and adds the evaluated nutrition summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Plain-text plan report.
//!
//! The report carries the same sections as the CSV export plus the derived
//! compliance status per goal, so it can be printed or attached to a
//! consultation record as-is.

use crate::engine::{aggregate_meal, summarize_plan};
use crate::models::{FoodTable, MealPlan};
use crate::nutrients::NutrientKey;

/// Render a plan as a plain-text report
#[must_use]
pub fn plan_report(table: &FoodTable, plan: &MealPlan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("NutriPlan Report — {}", plan.name));
    lines.push(format!("Created: {}", plan.created_at.format("%Y-%m-%d")));
    lines.push(format!(
        "Last updated: {}",
        plan.updated_at.format("%Y-%m-%d")
    ));
    lines.push(String::new());

    if let Some(nutritionist) = &plan.nutritionist {
        lines.push(format!(
            "Nutritionist: {} ({})",
            nutritionist.name, nutritionist.license
        ));
    }
    if let Some(patient) = &plan.patient {
        let mut details = vec![patient.name.clone()];
        if let Some(age) = patient.age {
            details.push(format!("{age} years"));
        }
        if let Some(height) = patient.height {
            details.push(format!("{height} cm"));
        }
        if let Some(weight) = patient.weight {
            details.push(format!("{weight} kg"));
        }
        lines.push(format!("Patient: {}", details.join(", ")));
    }
    if plan.nutritionist.is_some() || plan.patient.is_some() {
        lines.push(String::new());
    }

    push_meals(&mut lines, table, plan);
    push_summary(&mut lines, table, plan);

    lines.join("\n")
}

fn push_meals(lines: &mut Vec<String>, table: &FoodTable, plan: &MealPlan) {
    lines.push("Meals".to_owned());
    for meal in &plan.meals {
        let totals = aggregate_meal(table, meal);
        lines.push(format!(
            "  {} — {} kcal, {} g protein, {} g carbohydrates, {} g lipids",
            meal.name,
            totals[&NutrientKey::Energy].round(),
            totals[&NutrientKey::Protein].round(),
            totals[&NutrientKey::Carbohydrates].round(),
            totals[&NutrientKey::Lipids].round(),
        ));
        for item in &meal.items {
            let Some(food) = table.get(item.food_id) else {
                continue;
            };
            lines.push(format!(
                "    {} — {} {}",
                food.description,
                item.quantity,
                item.unit.label()
            ));
        }
    }
    lines.push(String::new());
}

fn push_summary(lines: &mut Vec<String>, table: &FoodTable, plan: &MealPlan) {
    lines.push("Nutrition Summary".to_owned());
    let summary = summarize_plan(table, plan);
    if summary.is_empty() {
        lines.push("  (no goals configured)".to_owned());
        return;
    }
    for (nutrient, entry) in &summary {
        let unit = nutrient.display_unit();
        lines.push(format!(
            "  {}: {} {} of {} {} {} (±{}%) [{}]",
            nutrient.label(),
            entry.value.round(),
            unit,
            entry.direction.glyph(),
            entry.target,
            unit,
            entry.tolerance,
            entry.status,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::MeasurementUnit;
    use crate::models::{Meal, MealItem, NutritionalGoal};

    #[test]
    fn test_report_contains_statuses() {
        let table = FoodTable::from_json(
            r#"[{"id": 1, "description": "Beans, cooked",
                 "nutrients": {"energy": 76.0, "protein": 4.8,
                               "carbohydrates": 13.6, "lipids": 0.5,
                               "fiber": 8.5}}]"#,
        )
        .unwrap();
        let mut plan = MealPlan::new("Plan");
        let mut meal = Meal::new("Dinner");
        meal.items.push(MealItem {
            food_id: 1,
            quantity: 2.0,
            unit: MeasurementUnit::Portion,
        });
        plan.meals.push(meal);
        plan.goals
            .insert(NutrientKey::Fiber, NutritionalGoal::min(30.0).with_tolerance(50.0));

        let report = plan_report(&table, &plan);
        assert!(report.contains("Nutrition Summary"));
        // 17 g of fiber is inside the 15..30 warning band
        assert!(report.contains("[warning]"));
        assert!(report.contains("Dinner — 152 kcal"));
    }

    #[test]
    fn test_report_without_goals() {
        let table = FoodTable::default();
        let plan = MealPlan::new("Empty");
        let report = plan_report(&table, &plan);
        assert!(report.contains("(no goals configured)"));
    }
}
