// ABOUTME: Unified error types for the NutriPlan library
// ABOUTME: Covers persistence and document parsing; the engine itself never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Library error handling.
//!
//! Only the persistence and import/export layers produce errors. The
//! aggregation and evaluation engine handles its two recoverable conditions
//! (unknown food id, unrecognized unit tag) by silent skip/fallback and
//! never raises.

use thiserror::Error;

/// Errors produced by plan persistence and document parsing
#[derive(Debug, Error)]
pub enum PlanError {
    /// Reading or writing a store file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document did not match the expected JSON shape
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// No persisted plan carries the requested id
    #[error("meal plan not found: {0}")]
    PlanNotFound(String),
}

/// Result alias used throughout the library
pub type PlanResult<T> = Result<T, PlanError>;
