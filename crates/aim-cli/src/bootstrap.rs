use anyhow::Context;
use aim_config::AimConfig;

use crate::cli::GlobalFlags;

/// Load layered config, apply `--db`, and validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AimConfig> {
    let mut config = AimConfig::load_with_dotenv().context("failed to load aim configuration")?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut AimConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}

/// Create the database's parent directory if it is missing.
pub fn ensure_db_dir(config: &AimConfig) -> anyhow::Result<()> {
    if let Some(parent) = config.database.parent_dir() {
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
