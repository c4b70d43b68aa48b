//! Service layer: all repository methods hang off `AimService`.

use aim_core::catalog::Catalog;

use crate::AimDb;
use crate::error::DatabaseError;
use crate::seed::SeedReport;

/// Entry point for every storage and scoring operation.
///
/// Repo methods live in `repos/*` as `impl AimService` blocks.
pub struct AimService {
    db: AimDb,
}

impl AimService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `seed` - Seed the built-in catalog if no pillars exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrated, or
    /// seeded.
    pub async fn new_local(db_path: &str, seed: bool) -> Result<Self, DatabaseError> {
        let svc = Self::from_db(AimDb::open_local(db_path).await?);
        if seed {
            svc.ensure_catalog().await?;
        }
        Ok(svc)
    }

    /// Wrap an already opened database.
    #[must_use]
    pub const fn from_db(db: AimDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AimDb {
        &self.db
    }

    /// Seed the built-in catalog when the pillar table is empty.
    ///
    /// Returns `None` when a catalog is already present.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if counting or seeding fails.
    pub async fn ensure_catalog(&self) -> Result<Option<SeedReport>, DatabaseError> {
        if self.count_pillars().await? > 0 {
            return Ok(None);
        }
        let catalog = Catalog::builtin()?;
        self.seed_catalog(&catalog).await.map(Some)
    }
}
