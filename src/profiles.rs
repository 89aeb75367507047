// ABOUTME: Built-in reference goal profiles by age group and sex
// ABOUTME: Each profile expands to a goal map with zero tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Reference goal profiles.
//!
//! Daily reference values compiled from dietary-intake literature
//! (Snetselaar et al. 2021; Aparicio et al. 2020; Buffini et al. 2023,
//! among others). A profile is a starting point: it expands to a [`Goals`]
//! map with zero tolerance, which the professional then adjusts per
//! patient.

use crate::models::{Goals, NutritionalGoal};
use crate::nutrients::NutrientKey;

/// A built-in reference profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalProfile {
    /// Adult man
    AdultMan,
    /// Adult woman
    AdultWoman,
    /// Teenage boy
    TeenagerBoy,
    /// Teenage girl
    TeenagerGirl,
    /// Child
    Child,
    /// Elderly man
    ElderlyMan,
    /// Elderly woman
    ElderlyWoman,
}

impl GoalProfile {
    /// Every built-in profile
    pub const ALL: &'static [Self] = &[
        Self::AdultMan,
        Self::AdultWoman,
        Self::TeenagerBoy,
        Self::TeenagerGirl,
        Self::Child,
        Self::ElderlyMan,
        Self::ElderlyWoman,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AdultMan => "Adult man",
            Self::AdultWoman => "Adult woman",
            Self::TeenagerBoy => "Teenage boy",
            Self::TeenagerGirl => "Teenage girl",
            Self::Child => "Child",
            Self::ElderlyMan => "Elderly man",
            Self::ElderlyWoman => "Elderly woman",
        }
    }

    /// Reference values as `(energy, protein, lipids, carbohydrates, fiber,
    /// sodium, potassium, calcium, iron, zinc, thiamine)`
    ///
    /// Energy through sodium are ceilings; fiber and the minerals from
    /// potassium on are floors.
    const fn reference_values(self) -> (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64) {
        match self {
            Self::AdultMan => (
                2600.0, 91.0, 80.0, 325.0, 30.0, 2300.0, 3400.0, 1200.0, 8.0, 11.0, 1.2,
            ),
            Self::AdultWoman => (
                2200.0, 75.0, 70.0, 275.0, 25.0, 2300.0, 2600.0, 1200.0, 18.0, 8.0, 1.1,
            ),
            Self::TeenagerBoy => (
                3200.0, 100.0, 80.0, 400.0, 38.0, 2300.0, 3000.0, 1300.0, 11.0, 11.0, 1.2,
            ),
            Self::TeenagerGirl => (
                2400.0, 100.0, 70.0, 300.0, 25.0, 2300.0, 2300.0, 1300.0, 15.0, 9.0, 1.0,
            ),
            Self::Child => (
                1600.0, 34.0, 40.0, 210.0, 25.0, 1900.0, 2300.0, 1000.0, 10.0, 5.0, 0.6,
            ),
            Self::ElderlyMan => (
                2400.0, 91.0, 80.0, 325.0, 30.0, 2300.0, 3400.0, 1200.0, 8.0, 11.0, 1.2,
            ),
            Self::ElderlyWoman => (
                2000.0, 75.0, 70.0, 275.0, 25.0, 2300.0, 2600.0, 1200.0, 8.0, 8.0, 1.1,
            ),
        }
    }

    /// Expand the profile into a goal map
    #[must_use]
    pub fn goals(self) -> Goals {
        let (energy, protein, lipids, carbohydrates, fiber, sodium, potassium, calcium, iron, zinc, thiamine) =
            self.reference_values();
        let mut goals = Goals::new();
        goals.insert(NutrientKey::Energy, NutritionalGoal::max(energy));
        goals.insert(NutrientKey::Protein, NutritionalGoal::max(protein));
        goals.insert(NutrientKey::Lipids, NutritionalGoal::max(lipids));
        goals.insert(
            NutrientKey::Carbohydrates,
            NutritionalGoal::max(carbohydrates),
        );
        goals.insert(NutrientKey::Fiber, NutritionalGoal::min(fiber));
        goals.insert(NutrientKey::Sodium, NutritionalGoal::max(sodium));
        goals.insert(NutrientKey::Potassium, NutritionalGoal::min(potassium));
        goals.insert(NutrientKey::Calcium, NutritionalGoal::min(calcium));
        goals.insert(NutrientKey::Iron, NutritionalGoal::min(iron));
        goals.insert(NutrientKey::Zinc, NutritionalGoal::min(zinc));
        goals.insert(NutrientKey::Thiamine, NutritionalGoal::min(thiamine));
        goals
    }
}
