//! The idempotent setup pipeline.
//!
//! Runs the three bootstrap steps in order and stops at the first failure:
//!
//! 1. Schema Initializer: create any missing tables
//! 2. Seed Orchestrator: create any missing baseline accounts
//! 3. Directory Provisioner: create the upload and face storage directories
//!
//! Every step is re-entrant, so running setup on a ready system changes
//! nothing.

use attendance_core::SetupError;
use sqlx::PgPool;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

use super::directories::ensure_directories;
use super::print_banner;
use super::seeder::{SEED_PASSWORD, SeedReport, baseline_seeds, seed_baseline_data};
use crate::state::SetupContext;

/// Furthest point the bootstrap has reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BootstrapStage {
    Uninitialized,
    SchemaReady,
    Seeded,
    DirectoriesReady,
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BootstrapStage::Uninitialized => "UNINITIALIZED",
            BootstrapStage::SchemaReady => "SCHEMA_READY",
            BootstrapStage::Seeded => "SEEDED",
            BootstrapStage::DirectoriesReady => "DIRECTORIES_READY",
        })
    }
}

/// A setup step failed. `completed` is the last stage reached before it.
#[derive(Debug, thiserror::Error)]
#[error("{source} (last completed stage: {completed})")]
pub struct SetupFailure {
    pub completed: BootstrapStage,
    #[source]
    pub source: SetupError,
}

impl SetupFailure {
    pub fn at(completed: BootstrapStage) -> impl FnOnce(SetupError) -> SetupFailure {
        move |source| SetupFailure { completed, source }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub seed: SeedReport,
    pub directories: Vec<PathBuf>,
}

/// Creates any missing tables.
pub async fn initialize_schema(db: &PgPool) -> Result<(), SetupError> {
    let mut conn = db.acquire().await.map_err(SetupError::Connection)?;
    attendance_db::ensure_schema(&mut *conn)
        .await
        .map_err(SetupError::Schema)
}

/// Runs schema creation, seeding and directory provisioning in order.
pub async fn setup_database(ctx: &SetupContext) -> Result<SetupReport, SetupFailure> {
    print_banner("Setting up Student Attendance System Database");

    println!("\n[1/3] Creating database tables...");
    initialize_schema(&ctx.db)
        .await
        .map_err(SetupFailure::at(BootstrapStage::Uninitialized))?;
    info!(stage = %BootstrapStage::SchemaReady, "Schema ready");
    println!("✓ Database tables created successfully!");

    println!("\n[2/3] Creating sample data...");
    let seed = seed_baseline_data(ctx)
        .await
        .map_err(SetupFailure::at(BootstrapStage::SchemaReady))?;
    if seed.already_seeded() {
        println!("⚠ Sample data already exists. Skipping...");
    } else if seed.repaired() {
        println!(
            "✓ Missing sample accounts created ({} already existed)",
            seed.existing.join(", ")
        );
    } else {
        println!("✓ Sample data created successfully!");
    }
    info!(stage = %BootstrapStage::Seeded, created = seed.created.len(), "Seeding done");

    println!("\n[3/3] Creating required directories...");
    let directories = ensure_directories(&ctx.config.storage.directories())
        .await
        .map_err(SetupFailure::at(BootstrapStage::Seeded))?;
    info!(stage = %BootstrapStage::DirectoriesReady, "Directories ready");
    println!("✓ Directories created successfully!");

    let report = SetupReport { seed, directories };
    print_summary(&report);
    Ok(report)
}

fn print_summary(report: &SetupReport) {
    println!();
    print_banner("Database setup completed successfully!");

    println!("\nSample Credentials:");
    println!("{}", "-".repeat(60));
    for seed in baseline_seeds() {
        println!("{}:", seed.role().label());
        println!("  Username: {}", seed.username);
        println!("  Password: {SEED_PASSWORD}");
        println!("{}", "-".repeat(60));
    }
    if !report.seed.already_seeded() {
        let created: Vec<&str> = report
            .seed
            .created
            .iter()
            .map(|account| account.username.as_str())
            .collect();
        println!("Created this run: {}", created.join(", "));
    }
    println!("{}", "=".repeat(60));
}
