// ABOUTME: NutriPlan CLI - evaluates and exports meal plans from the command line
// ABOUTME: Wraps the library's aggregation, evaluation, storage, and export APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors
//!
//! Usage:
//! ```bash
//! # Print the compliance summary for a plan
//! nutriplan-cli summary --foods foods.json --plan plan.json
//!
//! # Export a plan as CSV
//! nutriplan-cli export-csv --foods foods.json --plan plan.json --output plan.csv
//!
//! # Render a plain-text report
//! nutriplan-cli report --foods foods.json --plan plan.json
//!
//! # List plans in a store file
//! nutriplan-cli plans --store plans.json
//!
//! # Show the built-in reference goal profiles
//! nutriplan-cli profiles
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use nutriplan::engine::summarize_plan;
use nutriplan::export::{plan_report, plan_to_csv};
use nutriplan::models::{FoodTable, MealPlan};
use nutriplan::profiles::GoalProfile;
use nutriplan::storage::PlanStore;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "NutriPlan meal plan evaluation CLI",
    long_about = "Evaluates meal plans against nutritional goals using a fixed food-composition table, and exports them as CSV or plain-text reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the per-nutrient compliance summary for a plan
    Summary {
        /// Food-composition table (JSON array of food records)
        #[arg(long)]
        foods: PathBuf,
        /// Meal plan document (JSON)
        #[arg(long)]
        plan: PathBuf,
    },
    /// Export a plan as a semicolon-separated CSV document
    ExportCsv {
        /// Food-composition table (JSON array of food records)
        #[arg(long)]
        foods: PathBuf,
        /// Meal plan document (JSON)
        #[arg(long)]
        plan: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a plain-text report for a plan
    Report {
        /// Food-composition table (JSON array of food records)
        #[arg(long)]
        foods: PathBuf,
        /// Meal plan document (JSON)
        #[arg(long)]
        plan: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the plans saved in a store file
    Plans {
        /// Plan store file (JSON array of meal plans)
        #[arg(long)]
        store: PathBuf,
    },
    /// Show the built-in reference goal profiles
    Profiles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "nutriplan=debug"
    } else {
        "nutriplan=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Summary { foods, plan } => {
            let table = load_table(&foods)?;
            let plan = load_plan(&plan)?;
            print_summary(&table, &plan);
        }
        Command::ExportCsv {
            foods,
            plan,
            output,
        } => {
            let table = load_table(&foods)?;
            let plan = load_plan(&plan)?;
            emit(&plan_to_csv(&table, &plan), output.as_deref())?;
        }
        Command::Report {
            foods,
            plan,
            output,
        } => {
            let table = load_table(&foods)?;
            let plan = load_plan(&plan)?;
            emit(&plan_report(&table, &plan), output.as_deref())?;
        }
        Command::Plans { store } => {
            let store = PlanStore::new(store);
            let summaries = store.list_plans().context("failed to read plan store")?;
            if summaries.is_empty() {
                println!("no saved plans");
            }
            for summary in summaries {
                println!(
                    "{}  {}  (updated {})",
                    summary.id,
                    summary.name,
                    summary.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Command::Profiles => print_profiles(),
    }

    Ok(())
}

fn load_table(path: &Path) -> anyhow::Result<FoodTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read food table {}", path.display()))?;
    let table = FoodTable::from_json(&json)
        .with_context(|| format!("invalid food table {}", path.display()))?;
    info!(foods = table.len(), "food table loaded");
    Ok(table)
}

fn load_plan(path: &Path) -> anyhow::Result<MealPlan> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read plan {}", path.display()))?;
    let plan: MealPlan = serde_json::from_str(&json)
        .with_context(|| format!("invalid plan document {}", path.display()))?;
    info!(plan = %plan.name, meals = plan.meals.len(), "plan loaded");
    Ok(plan)
}

fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "export written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn print_summary(table: &FoodTable, plan: &MealPlan) {
    let summary = summarize_plan(table, plan);
    if summary.is_empty() {
        println!("plan has no configured goals");
        return;
    }
    println!("{:<28} {:>12} {:>16}  {}", "Nutrient", "Actual", "Goal", "Status");
    for (nutrient, entry) in &summary {
        let unit = nutrient.display_unit();
        println!(
            "{:<28} {:>9.1} {:<2} {:>10} {:<2}  {}",
            nutrient.label(),
            entry.value,
            unit,
            format!("{} {}", entry.direction.glyph(), entry.target),
            unit,
            entry.status,
        );
    }
}

fn print_profiles() {
    for profile in GoalProfile::ALL {
        println!("{}", profile.label());
        for (nutrient, goal) in profile.goals() {
            println!(
                "  {:<16} {} {} {}",
                nutrient.label(),
                goal.direction.glyph(),
                goal.target,
                nutrient.display_unit()
            );
        }
        println!();
    }
}
