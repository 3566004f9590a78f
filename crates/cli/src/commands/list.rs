//! `list` — print every vault in the account.

use coldvault_core::payloads::VaultSummary;
use coldvault_glacier::VaultService;

/// Vaults requested per page. Glacier caps a single page at 1000; ten
/// keeps the marker loop honest without hammering the API.
const PAGE_SIZE: i32 = 10;

/// Page through all vaults and print one table row per vault.
///
/// A failed page fetch is logged and ends the listing; whatever was
/// already printed stands.
pub async fn run(service: &dyn VaultService) {
    println!("#     Size         Vault Name");
    println!("------------------------------");

    let mut marker: Option<String> = None;
    loop {
        let page = match service.list_vaults(PAGE_SIZE, marker.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(error = %e, "Listing vaults failed");
                return;
            }
        };

        for vault in &page.vaults {
            println!("{}", vault_line(vault));
        }

        match page.marker {
            Some(next) => marker = Some(next),
            None => break,
        }
    }
}

/// One table row: archive count, size in bytes, vault name.
pub fn vault_line(vault: &VaultSummary) -> String {
    format!(
        "{:3}  {:12}  {}",
        vault.number_of_archives, vault.size_in_bytes, vault.vault_name
    )
}
