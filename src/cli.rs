//! CLI argument parsing using clap.
//!
//! Defines the `search`, `audit` and `list` subcommands with the options
//! they share.

use clap::{Args, Parser, Subcommand};

use crate::aws::AwsCliOptions;
use crate::models::MAX_LENGTH;
use crate::output::CsvMode;
use crate::processing::SearchField;

/// Search and audit AWS Managed Prefix Lists.
#[derive(Debug, Parser)]
#[command(name = "plutils")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: PlCommand,
}

/// Subcommands for plutils
#[derive(Debug, Subcommand)]
pub enum PlCommand {
    /// Search prefix list entries by description text or IP
    Search(SearchArgs),
    /// Report entries whose address block is larger than a size threshold
    Audit(AuditArgs),
    /// List customer-managed prefix lists
    List(ListArgs),
}

impl PlCommand {
    /// Short command name, used for log and report file prefixes.
    pub fn name(&self) -> &'static str {
        match self {
            PlCommand::Search(_) => "search",
            PlCommand::Audit(_) => "audit",
            PlCommand::List(_) => "list",
        }
    }

    /// The options shared by every subcommand.
    pub fn common(&self) -> &CommonArgs {
        match self {
            PlCommand::Search(args) => &args.common,
            PlCommand::Audit(args) => &args.common,
            PlCommand::List(args) => &args.common,
        }
    }
}

/// Arguments for the `search` subcommand.
#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub term: SearchTerm,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// The search term: exactly one of `--name` or `--ip`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SearchTerm {
    /// Search term for entry descriptions (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Search term for entry CIDRs; supports partial matches up to full CIDR notation
    #[arg(long)]
    pub ip: Option<String>,
}

impl SearchTerm {
    /// Resolve to the term and the entry field it applies to.
    pub fn criteria(&self) -> (&str, SearchField) {
        match (&self.name, &self.ip) {
            (Some(name), _) => (name, SearchField::Description),
            (_, Some(ip)) => (ip, SearchField::Cidr),
            // The arg group requires exactly one of the two.
            (None, None) => unreachable!("clap enforces one search term"),
        }
    }
}

/// Arguments for the `audit` subcommand.
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Maximum CIDR prefix (e.g. /29 or 29); any block with a smaller
    /// prefix length is considered a match
    #[arg(long, default_value = "29", value_parser = parse_max_cidr)]
    pub maxcidr: u8,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Only include prefix lists whose name contains this string (case-insensitive)
    #[arg(long, value_name = "FILTER")]
    pub plfilter: Option<String>,

    /// Exclude prefix lists whose name contains this string (case-insensitive)
    #[arg(long, value_name = "EXCLUDE")]
    pub plexclude: Option<String>,

    /// AWS CLI profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region to use
    #[arg(long)]
    pub region: Option<String>,

    /// Suppress intermediate console output (the final report still prints)
    #[arg(long, short)]
    pub quiet: bool,

    /// Output a CSV report, optionally to a specific filename
    #[arg(long, value_name = "FILE")]
    pub csv: Option<Option<String>>,
}

impl CommonArgs {
    /// Session options forwarded to the AWS CLI.
    pub fn aws_options(&self) -> AwsCliOptions {
        AwsCliOptions::new(self.profile.clone(), self.region.clone())
    }

    /// The requested CSV export mode.
    pub fn csv_mode(&self) -> CsvMode {
        CsvMode::from_arg(self.csv.clone())
    }
}

/// Parse a `--maxcidr` value like `29` or `/29` into a prefix length.
fn parse_max_cidr(value: &str) -> Result<u8, String> {
    let digits = value.trim().trim_start_matches('/');
    let parsed: u8 = digits
        .parse()
        .map_err(|_| format!("invalid value '{value}': specify a number like 29 or /29"))?;
    if parsed > MAX_LENGTH {
        return Err(format!(
            "invalid value '{value}': prefix length must be 0-{MAX_LENGTH}"
        ));
    }
    Ok(parsed)
}
