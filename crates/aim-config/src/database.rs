//! Local database configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = ".aim/aim.db";

fn default_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

const fn default_seed_catalog() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file. `:memory:` opens a throwaway in-memory database.
    #[serde(default = "default_path")]
    pub path: String,

    /// Seed the built-in catalog on open when no pillars exist yet.
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            seed_catalog: default_seed_catalog(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Parent directory that must exist before the file can be opened.
    ///
    /// `None` for in-memory databases and bare file names.
    #[must_use]
    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}
