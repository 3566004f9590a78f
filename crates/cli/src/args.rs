//! Command-line argument surface.

use std::path::PathBuf;

use clap::Parser;

/// Actions advertised in help output and in the unknown-action message.
///
/// `init` is deliberately absent: it is a one-time setup step, not part of
/// the day-to-day surface.
pub const VALID_ACTIONS: &[&str] = &[
    "list",
    "start_inventory",
    "status",
    "get_inventory",
    "history",
    "delete",
];

/// Manage S3 Glacier vaults and inventory-retrieval jobs.
///
/// `ACTION` is a plain string rather than a clap subcommand so that an
/// unrecognized action can be reported with the valid-action list and a
/// zero exit code instead of clap's usage error.
#[derive(Debug, Parser)]
#[command(name = "coldvault", version)]
pub struct Cli {
    /// Action to perform: list, start_inventory, status, get_inventory,
    /// history, delete
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Name of the Glacier vault to operate on
    #[arg(value_name = "VAULT_NAME")]
    pub vault: Option<String>,

    /// Display all log messages
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Log file containing archive IDs (used by `delete`)
    #[arg(short = 'f', long = "filename", value_name = "INPUT_FILE")]
    pub filename: Option<PathBuf>,

    /// Restrict `get_inventory` to a single job ID
    #[arg(short = 'j', long = "job", value_name = "JOB_ID")]
    pub job: Option<String>,
}
