//! `start_inventory`, `get_inventory` and `history`.
//!
//! `get_inventory` caches the fetched payload in the job's `inventory`
//! column; `history` only ever reads that column and says so explicitly
//! when it is still empty, so the two actions can run in any order.

use chrono::Utc;
use coldvault_core::payloads::{InventoryArchive, VaultInventory};
use coldvault_db::repositories::JobRepo;
use coldvault_db::DbPool;
use coldvault_glacier::VaultService;

use super::job_id_prefix;

/// Initiate an inventory-retrieval job and start tracking it.
///
/// The raw initiation payload is kept on the row until the first status
/// poll replaces it.
pub async fn start(
    pool: &DbPool,
    service: &dyn VaultService,
    vault_name: &str,
) -> anyhow::Result<()> {
    let initiated = match service.initiate_inventory_job(vault_name).await {
        Ok(initiated) => initiated,
        Err(e) => {
            tracing::error!(error = %e, vault = vault_name, "Initiating inventory-retrieval job failed");
            return Ok(());
        }
    };

    let raw = serde_json::to_string(&initiated)?;
    JobRepo::create(pool, &initiated.job_id, vault_name, &raw).await?;

    println!("Initiated inventory-retrieval job for {vault_name}");
    println!("Retrieval Job ID: {}", initiated.job_id);
    Ok(())
}

/// Fetch and cache inventory results for completed jobs still inside the
/// fetch window; `only_job` restricts the pass to a single job ID.
pub async fn get(
    pool: &DbPool,
    service: &dyn VaultService,
    only_job: Option<&str>,
) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();

    for job in JobRepo::list_completed(pool).await? {
        if let Some(id) = only_job {
            if job.job_id != id {
                continue;
            }
        }
        if !job.inventory_fetch_due(today) {
            tracing::debug!(job_id = %job.job_id, "Outside the inventory fetch window, skipping");
            continue;
        }

        let inventory = match service.inventory_results(&job.vault_name, &job.job_id).await {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::error!(error = %e, job_id = %job.job_id, "Fetching inventory results failed");
                continue;
            }
        };

        let raw = serde_json::to_string(&inventory)?;
        JobRepo::cache_inventory(pool, &job.job_id, &raw).await?;

        println!("Vault ARN: {}", inventory.vault_arn);
        for archive in &inventory.archive_list {
            println!("{}", fetched_archive_line(archive));
        }
    }
    Ok(())
}

/// Print the cached inventory of every completed job.
pub async fn history(pool: &DbPool) -> anyhow::Result<()> {
    for job in JobRepo::list_completed(pool).await? {
        let Some(raw) = job.inventory.as_deref() else {
            println!(
                "{}...: no cached inventory (run get_inventory first)",
                job_id_prefix(&job.job_id)
            );
            continue;
        };

        let inventory: VaultInventory = match serde_json::from_str(raw) {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::error!(error = %e, job_id = %job.job_id, "Cached inventory is unreadable");
                continue;
            }
        };

        println!("Vault ARN: {}", inventory.vault_arn);
        for archive in &inventory.archive_list {
            println!("{}", history_line(archive));
        }
    }
    Ok(())
}

/// Per-archive line printed right after a fetch.
pub fn fetched_archive_line(archive: &InventoryArchive) -> String {
    format!(
        "  Size: {:6},  Archive ID: {},  Description: {}",
        archive.size, archive.archive_id, archive.description
    )
}

/// Per-archive line printed by `history`: id, size, description.
pub fn history_line(archive: &InventoryArchive) -> String {
    format!(
        "{}; {}; {}",
        archive.archive_id, archive.size, archive.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive() -> InventoryArchive {
        InventoryArchive {
            archive_id: "kKB7ymWJVpPSwhGP6ycSOAek".into(),
            size: 4194304,
            description: "march backup".into(),
            creation_date: None,
            sha256_tree_hash: None,
        }
    }

    #[test]
    fn history_line_is_semicolon_separated() {
        assert_eq!(
            history_line(&archive()),
            "kKB7ymWJVpPSwhGP6ycSOAek; 4194304; march backup"
        );
    }

    #[test]
    fn fetched_archive_line_matches_the_report_format() {
        assert_eq!(
            fetched_archive_line(&archive()),
            "  Size: 4194304,  Archive ID: kKB7ymWJVpPSwhGP6ycSOAek,  Description: march backup"
        );
    }
}
