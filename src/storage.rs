// ABOUTME: File-backed JSON persistence for meal plans
// ABOUTME: Save, load, list, and delete plans by id in a single store document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Plan persistence.
//!
//! A store is a single JSON document holding an array of meal plans with
//! ISO-8601 timestamps. Saving replaces any plan with the same id. A
//! missing store file reads as empty; a malformed document surfaces as a
//! typed error before the engine ever sees it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{PlanError, PlanResult};
use crate::models::{MealPlan, SavedPlanSummary};

/// File-backed collection of saved meal plans
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Open a store at the given path; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> PlanResult<Vec<MealPlan>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write_all(&self, plans: &[MealPlan]) -> PlanResult<()> {
        let json = serde_json::to_string_pretty(plans)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Insert or replace a plan by id
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be read or written, or
    /// holds a malformed document.
    pub fn save_plan(&self, plan: &MealPlan) -> PlanResult<()> {
        let mut plans = self.read_all()?;
        plans.retain(|existing| existing.id != plan.id);
        plans.push(plan.clone());
        self.write_all(&plans)?;
        tracing::debug!(plan_id = %plan.id, "plan saved");
        Ok(())
    }

    /// Load a plan by id
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::PlanNotFound`] if no plan carries the id, or an
    /// I/O/parse error for an unreadable store.
    pub fn load_plan(&self, id: &str) -> PlanResult<MealPlan> {
        self.read_all()?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| PlanError::PlanNotFound(id.to_owned()))
    }

    /// Delete a plan by id
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::PlanNotFound`] if no plan carries the id.
    pub fn delete_plan(&self, id: &str) -> PlanResult<()> {
        let mut plans = self.read_all()?;
        let before = plans.len();
        plans.retain(|plan| plan.id != id);
        if plans.len() == before {
            return Err(PlanError::PlanNotFound(id.to_owned()));
        }
        self.write_all(&plans)
    }

    /// List saved plans, most recently updated first
    ///
    /// # Errors
    ///
    /// Returns an error for an unreadable or malformed store.
    pub fn list_plans(&self) -> PlanResult<Vec<SavedPlanSummary>> {
        let mut summaries: Vec<SavedPlanSummary> =
            self.read_all()?.iter().map(SavedPlanSummary::from).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }
}
