//! Seed Orchestrator: baseline accounts for first login.
//!
//! # Module Structure
//!
//! - [`models`] - the fixed baseline accounts and the run report
//! - [`accounts`] - identity and profile inserts
//!
//! # Guarantees
//!
//! - The existence check and every insert share one transaction. Either all
//!   staged pairs become durable at commit or none do.
//! - Each identity is inserted first and its generated id read back before
//!   the profile referencing it is written.
//! - All three baseline usernames are checked. When all exist nothing is
//!   written; when only some exist the missing pairs are created.
//!
//! Two operators seeding at once is not guarded against. The loser's commit
//! fails on the `users.username` unique constraint and surfaces as
//! [`SetupError::Integrity`].

pub mod accounts;
pub mod models;

pub use models::{BaselineSeed, SEED_PASSWORD, SeedProfile, SeedReport, SeededAccount, baseline_seeds};

use attendance_core::{SetupError, hash_password_with_cost};
use sqlx::PgPool;
use std::time::Instant;
use tracing::{info, warn};

use crate::state::SetupContext;

/// Seeds the baseline student, teacher and counsellor accounts.
pub async fn seed_baseline_data(ctx: &SetupContext) -> Result<SeedReport, SetupError> {
    seed_accounts(&ctx.db, &baseline_seeds(), ctx.config.bcrypt_cost).await
}

/// Seeds `seeds` in order inside a single transaction.
pub async fn seed_accounts(
    db: &PgPool,
    seeds: &[BaselineSeed],
    bcrypt_cost: u32,
) -> Result<SeedReport, SetupError> {
    let start_time = Instant::now();
    let mut tx = db.begin().await?;

    let usernames: Vec<&str> = seeds.iter().map(|seed| seed.username.as_str()).collect();
    let existing = accounts::existing_usernames(&mut *tx, &usernames).await?;

    let mut report = SeedReport {
        created: Vec::with_capacity(seeds.len()),
        existing: usernames
            .iter()
            .filter(|username| existing.contains(**username))
            .map(|username| username.to_string())
            .collect(),
    };

    if report.existing.len() == seeds.len() {
        info!(accounts = seeds.len(), "Baseline accounts already present");
        return Ok(report);
    }

    if !report.existing.is_empty() {
        warn!(
            existing = ?report.existing,
            "Baseline partially seeded; creating missing accounts only"
        );
    }

    for seed in seeds.iter().filter(|seed| !existing.contains(&seed.username)) {
        let password_hash = hash_password_with_cost(SEED_PASSWORD, bcrypt_cost)?;

        let user_id = accounts::insert_identity(&mut *tx, &seed.to_new_user(password_hash)).await?;
        accounts::insert_profile(&mut *tx, user_id, &seed.profile).await?;

        info!(username = %seed.username, role = %seed.role(), %user_id, "Staged baseline account");
        report.created.push(SeededAccount {
            user_id,
            username: seed.username.clone(),
            role: seed.role(),
        });
    }

    tx.commit().await?;

    info!(
        created = report.created.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Baseline accounts committed"
    );

    Ok(report)
}
