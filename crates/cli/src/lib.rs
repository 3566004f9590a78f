//! Action dispatch for the `coldvault` binary.
//!
//! Each action is a thin sequential routine over the job store and the
//! vault service. Remote failures are logged and the affected item is
//! skipped; only local-store failures propagate. An unrecognized action is
//! reported and the process still exits 0.

use std::path::PathBuf;

use coldvault_db::DbPool;
use coldvault_glacier::VaultService;

pub mod args;
pub mod commands;

pub use args::{Cli, VALID_ACTIONS};

/// Default location of the job-store database.
pub const DEFAULT_DB_PATH: &str = "jobs/status.db";

/// Default archive-ID log consumed by `delete`.
pub const DEFAULT_ARCHIVE_LOG: &str = "archive.txt";

/// Execute the requested action.
pub async fn run_action(
    cli: &Cli,
    pool: &DbPool,
    service: &dyn VaultService,
) -> anyhow::Result<()> {
    match cli.action.as_str() {
        "list" => {
            commands::list::run(service).await;
            Ok(())
        }
        "start_inventory" => match cli.vault.as_deref() {
            Some(vault) => commands::inventory::start(pool, service, vault).await,
            None => {
                println!("Vault name required to start an inventory-retrieval job");
                Ok(())
            }
        },
        "status" => commands::status::run(pool, service).await,
        "get_inventory" => {
            commands::inventory::get(pool, service, cli.job.as_deref()).await
        }
        "history" => commands::inventory::history(pool).await,
        "delete" => match cli.vault.as_deref() {
            Some(vault) => {
                let filename = cli
                    .filename
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_LOG));
                commands::delete::run(service, vault, &filename).await
            }
            None => {
                println!("Vault name required to delete archives");
                Ok(())
            }
        },
        "init" => {
            coldvault_db::MIGRATOR.run(pool).await?;
            println!("Job store initialized");
            Ok(())
        }
        other => {
            println!("ERROR: Action '{other}' is not recognized.");
            println!("Valid actions are: {}", VALID_ACTIONS.join(" "));
            Ok(())
        }
    }
}
