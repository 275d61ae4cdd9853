//! Import command implementation.

use crate::cli::ImportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::snapshot::SnapshotFile;
use kindred_store::SqliteStore;

/// Execute the import command.
pub fn execute_import(args: ImportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let db = config.database(args.db.as_deref())?;
    let (members, relationships) = SnapshotFile::read(&args.file)?.into_parts()?;

    let mut store = SqliteStore::new(&db)?;
    store.import(&members, &relationships)?;

    tracing::info!(
        db = %db.display(),
        members = members.len(),
        relationships = relationships.len(),
        "Snapshot imported"
    );
    println!("{}", formatter.imported(members.len(), relationships.len()));

    Ok(())
}
