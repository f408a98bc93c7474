use std::path::Path;

use anyhow::Context;
use dash_config::DashConfig;
use dash_db::{DashDb, SeedOutcome};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SeedReport {
    collection: String,
    dataset: String,
    mode: String,
    outcome: String,
    inserted: usize,
    total: u64,
}

/// Handle `dash seed`.
///
/// Unlike startup seeding, failures here are reported as command errors.
pub async fn handle(args: &SeedArgs, config: &DashConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.seed.mode);
    let dataset = args
        .dataset
        .clone()
        .unwrap_or_else(|| config.seed.dataset_path.clone());

    let db = DashDb::open(&config.store)
        .await
        .with_context(|| format!("failed to open record store at {}", config.store.url))?;
    let outcome = dash_db::seed(&db, Path::new(&dataset), mode)
        .await
        .with_context(|| format!("failed to seed from {dataset}"))?;
    let total = db.count().await.context("failed to count records after seeding")?;

    tracing::info!(%outcome, %mode, total, "seed finished");

    let inserted = match outcome {
        SeedOutcome::Inserted(n) => n,
        SeedOutcome::SkippedNonEmpty(_) | SeedOutcome::Disabled => 0,
    };
    output(
        &SeedReport {
            collection: db.collection().to_string(),
            dataset,
            mode: mode.to_string(),
            outcome: outcome.to_string(),
            inserted,
            total,
        },
        flags.format,
    )
}
