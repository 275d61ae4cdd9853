//! Family data sources selected on the command line.

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::Result;
use crate::snapshot::SnapshotFile;
use kindred_domain::{FamilyId, FamilySnapshot, FamilyStore, Member, Relationship};
use kindred_store::{SqliteStore, StoreError};

/// Either a SQLite database or a JSON snapshot loaded into memory.
pub enum FamilySource {
    /// SQLite database
    Sqlite(SqliteStore),
    /// JSON snapshot
    Snapshot(FamilySnapshot),
}

impl FamilySource {
    /// Open the source named by the arguments, falling back to the configured database.
    pub fn open(args: &SourceArgs, config: &Config) -> Result<Self> {
        if let Some(path) = &args.snapshot {
            tracing::debug!(path = %path.display(), "Loading snapshot");
            return Ok(FamilySource::Snapshot(SnapshotFile::read(path)?.into_snapshot()?));
        }

        let path = config.database(args.db.as_deref())?;
        tracing::debug!(path = %path.display(), "Opening database");
        Ok(FamilySource::Sqlite(SqliteStore::new(&path)?))
    }
}

impl FamilyStore for FamilySource {
    type Error = StoreError;

    fn get_members(&self, family_id: FamilyId) -> std::result::Result<Vec<Member>, StoreError> {
        match self {
            FamilySource::Sqlite(store) => store.get_members(family_id),
            FamilySource::Snapshot(snapshot) => {
                snapshot.get_members(family_id).map_err(|never| match never {})
            }
        }
    }

    fn get_relationships(
        &self,
        family_id: FamilyId,
    ) -> std::result::Result<Vec<Relationship>, StoreError> {
        match self {
            FamilySource::Sqlite(store) => store.get_relationships(family_id),
            FamilySource::Snapshot(snapshot) => snapshot
                .get_relationships(family_id)
                .map_err(|never| match never {}),
        }
    }
}
