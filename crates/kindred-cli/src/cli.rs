//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Kindred CLI - Name the relationship between two family members.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINDRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels or IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect the relationship between two members
    Detect(DetectArgs),

    /// Load a JSON family snapshot into a SQLite database
    Import(ImportArgs),

    /// List the members of a family
    Members(MembersArgs),
}

/// Where family data is read from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// SQLite database path (defaults to settings.database)
    #[arg(long, conflicts_with = "snapshot")]
    pub db: Option<PathBuf>,

    /// JSON snapshot file
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the detect command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Family ID (UUID)
    #[arg(long)]
    pub family: String,

    /// First member ID (UUID)
    pub member_a: String,

    /// Second member ID (UUID)
    pub member_b: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Language of the relationship terms
    #[arg(short, long, value_enum)]
    pub locale: Option<LocaleArg>,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// JSON snapshot file to import
    pub file: PathBuf,

    /// SQLite database path (defaults to settings.database)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the members command.
#[derive(Debug, Parser)]
pub struct MembersArgs {
    /// Family ID (UUID)
    #[arg(long)]
    pub family: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Locale argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LocaleArg {
    /// English terms
    En,
    /// Vietnamese terms
    Vi,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<LocaleArg> for kindred_engine::Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::En => kindred_engine::Locale::English,
            LocaleArg::Vi => kindred_engine::Locale::Vietnamese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_command() {
        let cli = Cli::parse_from([
            "kindred",
            "detect",
            "--family",
            "0194a3b2-0000-7000-8000-000000000001",
            "0194a3b2-0000-7000-8000-000000000002",
            "0194a3b2-0000-7000-8000-000000000003",
            "--snapshot",
            "family.json",
            "--locale",
            "vi",
        ]);
        match cli.command {
            Command::Detect(args) => {
                assert_eq!(args.member_a, "0194a3b2-0000-7000-8000-000000000002");
                assert_eq!(args.source.snapshot, Some(PathBuf::from("family.json")));
                assert!(args.source.db.is_none());
                assert!(matches!(args.locale, Some(LocaleArg::Vi)));
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_db_and_snapshot_conflict() {
        let result = Cli::try_parse_from([
            "kindred",
            "members",
            "--family",
            "x",
            "--db",
            "family.db",
            "--snapshot",
            "family.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "kindred",
            "-vv",
            "import",
            "family.json",
            "--db",
            "family.db",
            "-f",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Import(args) => assert_eq!(args.db, Some(PathBuf::from("family.db"))),
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_locale_conversion() {
        let locale: kindred_engine::Locale = LocaleArg::Vi.into();
        assert_eq!(locale, kindred_engine::Locale::Vietnamese);
    }
}
