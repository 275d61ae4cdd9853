//! Members command implementation.

use crate::cli::MembersArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::snapshot::parse_family_id;
use crate::source::FamilySource;
use kindred_domain::FamilyStore;

/// Execute the members command.
pub fn execute_members(args: MembersArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let family_id = parse_family_id(&args.family)?;
    let source = FamilySource::open(&args.source, config)?;
    let members = source.get_members(family_id)?;

    println!("{}", formatter.format_members(&members)?);

    Ok(())
}
