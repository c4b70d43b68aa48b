use anyhow::Context;
use aim_config::AimConfig;
use aim_db::service::AimService;

use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: AimService,
    pub config: AimConfig,
}

impl AppContext {
    /// Open the configured database, seeding the catalog when enabled.
    pub async fn init(config: AimConfig) -> anyhow::Result<Self> {
        bootstrap::ensure_db_dir(&config)?;

        let service = AimService::new_local(&config.database.path, config.database.seed_catalog)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        tracing::debug!(path = %config.database.path, "aim database ready");
        Ok(Self { service, config })
    }
}
