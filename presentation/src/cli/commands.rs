//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use reviewng_domain::{Classification, EditId, UserId};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for reviewng
#[derive(Parser, Debug)]
#[command(name = "reviewng")]
#[command(author, version, about = "Consensus engine for reviewing wiki edits")]
#[command(long_about = r#"
reviewng collects independent classifications of historical wiki edits and
reduces them to a single verdict per edit.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./reviewng.toml        Project-level config
3. ~/.config/reviewng/config.toml   Global config

Example:
  reviewng next --user 3
  reviewng vote --user 3 --edit 1048576 --as vandalism --comment "page blanking"
  reviewng reconcile
  reviewng export --done --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the next edit a reviewer should classify
    Next {
        #[arg(long, value_name = "ID")]
        user: UserId,
    },

    /// Record a classification
    Vote {
        #[arg(long, value_name = "ID")]
        user: UserId,

        #[arg(long, value_name = "ID")]
        edit: EditId,

        /// constructive, vandalism or skip
        #[arg(long = "as", value_name = "CLASS")]
        classification: Classification,

        #[arg(long, default_value = "")]
        comment: String,

        /// Record the vote even if it contradicts the settled verdict
        #[arg(long)]
        confirm: bool,
    },

    /// Show an edit's tally, status and votes
    Status {
        #[arg(long, value_name = "ID")]
        edit: EditId,
    },

    /// Fetch training data for settled edits that are missing it
    Reconcile,

    /// Show group completion and reviewer accuracy
    Stats,

    /// Dump groups, edits and users as JSON
    Export {
        /// Only edits with a settled classification
        #[arg(long)]
        done: bool,

        /// Export cached training data instead
        #[arg(long, conflicts_with = "done")]
        training: bool,
    },

    /// Import edits reported through the report interface
    ImportReports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vote() {
        let cli = Cli::try_parse_from([
            "reviewng", "vote", "--user", "3", "--edit", "77", "--as", "v", "--confirm",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Vote {
                user: UserId::new(3),
                edit: EditId::new(77),
                classification: Classification::Vandalism,
                comment: String::new(),
                confirm: true,
            })
        );
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["reviewng", "stats", "-vv", "--output", "json"]).unwrap();
        assert_eq!(cli.command, Some(Command::Stats));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_ids_and_classes() {
        assert!(Cli::try_parse_from(["reviewng", "next", "--user", "abc"]).is_err());
        assert!(
            Cli::try_parse_from([
                "reviewng", "vote", "--user", "1", "--edit", "2", "--as", "maybe"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_export_flags_conflict() {
        assert!(Cli::try_parse_from(["reviewng", "export", "--done", "--training"]).is_err());
    }
}
