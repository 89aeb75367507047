// ABOUTME: Plan export surfaces: CSV document and plain-text report
// ABOUTME: Both render the derived nutrition summary, never persist it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Plan export.
//!
//! Exports are pure string builders over a plan and the food table. Status
//! values render as exactly `success`, `warning`, or `error`; targets and
//! values carry the nutrient's fixed display unit.

/// Semicolon-separated CSV document
pub mod csv;
/// Plain-text report with compliance statuses
pub mod report;

pub use csv::plan_to_csv;
pub use report::plan_report;
