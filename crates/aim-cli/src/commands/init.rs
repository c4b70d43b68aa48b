use anyhow::Context;
use aim_config::AimConfig;
use aim_db::seed::SeedReport;
use aim_db::service::AimService;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    database: String,
    /// `None` when the catalog was already present.
    seeded: Option<SeedReport>,
    pillars: usize,
}

/// Handle `aim init`: open (creating and migrating) the database, then seed
/// the catalog regardless of `database.seed_catalog`.
pub async fn handle(config: &AimConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    bootstrap::ensure_db_dir(config)?;

    let service = AimService::new_local(&config.database.path, false)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    let seeded = service
        .ensure_catalog()
        .await
        .context("failed to seed question catalog")?;
    let pillars = service.list_pillars().await?.len();

    output(
        &InitResponse {
            database: config.database.path.clone(),
            seeded,
            pillars,
        },
        flags.format,
    )
}
