//! `delete` — delete every archive named in a log file.

use std::path::Path;

use coldvault_core::archive_log;
use coldvault_glacier::VaultService;

/// Extract archive IDs from `filename` and delete each one from the vault.
///
/// A failed deletion is logged and the remaining IDs are still attempted.
/// An unreadable log file is the one local error worth stopping for.
pub async fn run(
    service: &dyn VaultService,
    vault_name: &str,
    filename: &Path,
) -> anyhow::Result<()> {
    let archive_ids = archive_log::archive_ids_from_file(filename)?;
    if archive_ids.is_empty() {
        tracing::warn!(file = %filename.display(), "No archive IDs found in log file");
        return Ok(());
    }

    for archive_id in archive_ids {
        match service.delete_archive(vault_name, &archive_id).await {
            Ok(()) => println!("Deleted archive {archive_id} from {vault_name}"),
            Err(e) => {
                tracing::error!(error = %e, archive_id = %archive_id, "Deleting archive failed");
            }
        }
    }
    Ok(())
}
