//! The vault service trait and its error type.

use async_trait::async_trait;
use coldvault_core::payloads::{InitiatedJob, JobDescription, VaultInventory, VaultPage};

/// Errors surfaced by a vault service implementation.
#[derive(Debug, thiserror::Error)]
pub enum GlacierError {
    /// The remote call itself failed (network, auth, service-side error).
    #[error("Glacier API error: {0}")]
    Api(String),

    /// A response body could not be parsed as the expected payload.
    #[error("Malformed service payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A timestamp in a service response was not valid RFC 3339.
    #[error("Invalid timestamp in service response: {0}")]
    Timestamp(String),

    /// A response was missing a field the caller cannot proceed without.
    #[error("Service response missing field: {0}")]
    MissingField(&'static str),
}

/// Operations consumed from the cold-storage service.
///
/// The CLI routines only ever see this trait, so tests can substitute a
/// stub for the real [`GlacierClient`](crate::client::GlacierClient).
#[async_trait]
pub trait VaultService: Send + Sync {
    /// Fetch one page of vaults. `marker` of `None` starts from the
    /// beginning; the returned page carries the marker for the next batch,
    /// or `None` when there are no more vaults.
    async fn list_vaults(
        &self,
        limit: i32,
        marker: Option<&str>,
    ) -> Result<VaultPage, GlacierError>;

    /// Initiate an inventory-retrieval job against a vault.
    async fn initiate_inventory_job(
        &self,
        vault_name: &str,
    ) -> Result<InitiatedJob, GlacierError>;

    /// Retrieve the current status of a job.
    async fn describe_job(
        &self,
        vault_name: &str,
        job_id: &str,
    ) -> Result<JobDescription, GlacierError>;

    /// Fetch the output of a completed inventory-retrieval job.
    async fn inventory_results(
        &self,
        vault_name: &str,
        job_id: &str,
    ) -> Result<VaultInventory, GlacierError>;

    /// Delete a single archive from a vault.
    async fn delete_archive(
        &self,
        vault_name: &str,
        archive_id: &str,
    ) -> Result<(), GlacierError>;
}
