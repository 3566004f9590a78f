//! AWS SDK implementation of the vault service.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_glacier::error::DisplayErrorContext;
use aws_sdk_glacier::types::JobParameters;
use chrono::{DateTime, Utc};
use coldvault_core::payloads::{
    InitiatedJob, JobDescription, VaultInventory, VaultPage, VaultSummary,
};
use coldvault_core::types::Timestamp;

use crate::service::{GlacierError, VaultService};

/// Glacier addresses vaults under an account ID; `-` means the account the
/// credentials belong to.
const OWN_ACCOUNT: &str = "-";

/// Job type parameter for inventory-retrieval jobs.
const INVENTORY_RETRIEVAL: &str = "inventory-retrieval";

/// Production [`VaultService`] backed by `aws-sdk-glacier`.
pub struct GlacierClient {
    client: aws_sdk_glacier::Client,
}

impl GlacierClient {
    /// Wrap an existing SDK client.
    pub fn new(client: aws_sdk_glacier::Client) -> Self {
        Self { client }
    }

    /// Build a client from the standard AWS configuration chain
    /// (environment, shared config files, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_glacier::Client::new(&config))
    }
}

/// Parse an optional RFC 3339 timestamp from a service response.
fn parse_timestamp(value: Option<&str>) -> Result<Option<Timestamp>, GlacierError> {
    value
        .map(|s| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| GlacierError::Timestamp(s.to_string()))
        })
        .transpose()
}

/// Render an SDK error with its full context chain.
fn sdk_error<E>(err: aws_sdk_glacier::error::SdkError<E>) -> GlacierError
where
    E: std::error::Error + Send + Sync + 'static,
{
    GlacierError::Api(DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl VaultService for GlacierClient {
    async fn list_vaults(
        &self,
        limit: i32,
        marker: Option<&str>,
    ) -> Result<VaultPage, GlacierError> {
        let output = self
            .client
            .list_vaults()
            .account_id(OWN_ACCOUNT)
            .limit(limit)
            .set_marker(marker.map(String::from))
            .send()
            .await
            .map_err(sdk_error)?;

        let mut vaults = Vec::new();
        for vault in output.vault_list() {
            vaults.push(VaultSummary {
                vault_name: vault.vault_name().unwrap_or_default().to_string(),
                number_of_archives: vault.number_of_archives(),
                size_in_bytes: vault.size_in_bytes(),
                creation_date: parse_timestamp(vault.creation_date())?,
            });
        }

        Ok(VaultPage {
            vaults,
            marker: output.marker().map(String::from),
        })
    }

    async fn initiate_inventory_job(
        &self,
        vault_name: &str,
    ) -> Result<InitiatedJob, GlacierError> {
        let parameters = JobParameters::builder()
            .r#type(INVENTORY_RETRIEVAL)
            .build();

        let output = self
            .client
            .initiate_job()
            .account_id(OWN_ACCOUNT)
            .vault_name(vault_name)
            .job_parameters(parameters)
            .send()
            .await
            .map_err(sdk_error)?;

        let job_id = output
            .job_id()
            .ok_or(GlacierError::MissingField("jobId"))?
            .to_string();

        tracing::debug!(vault = vault_name, job_id = %job_id, "Initiated inventory-retrieval job");

        Ok(InitiatedJob {
            job_id,
            location: output.location().map(String::from),
        })
    }

    async fn describe_job(
        &self,
        vault_name: &str,
        job_id: &str,
    ) -> Result<JobDescription, GlacierError> {
        let output = self
            .client
            .describe_job()
            .account_id(OWN_ACCOUNT)
            .vault_name(vault_name)
            .job_id(job_id)
            .send()
            .await
            .map_err(sdk_error)?;

        Ok(JobDescription {
            action: output
                .action()
                .map(|a| a.as_str().to_string())
                .unwrap_or_default(),
            status_code: output
                .status_code()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            completed: output.completed(),
            creation_date: parse_timestamp(output.creation_date())?,
            completion_date: parse_timestamp(output.completion_date())?,
        })
    }

    async fn inventory_results(
        &self,
        vault_name: &str,
        job_id: &str,
    ) -> Result<VaultInventory, GlacierError> {
        let output = self
            .client
            .get_job_output()
            .account_id(OWN_ACCOUNT)
            .vault_name(vault_name)
            .job_id(job_id)
            .send()
            .await
            .map_err(sdk_error)?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| GlacierError::Api(e.to_string()))?
            .into_bytes();

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn delete_archive(
        &self,
        vault_name: &str,
        archive_id: &str,
    ) -> Result<(), GlacierError> {
        self.client
            .delete_archive()
            .account_id(OWN_ACCOUNT)
            .vault_name(vault_name)
            .archive_id(archive_id)
            .send()
            .await
            .map_err(sdk_error)?;

        tracing::debug!(vault = vault_name, archive_id, "Deleted archive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_glacier_timestamps() {
        let ts = parse_timestamp(Some("2019-03-02T01:10:00.000Z")).unwrap().unwrap();
        assert_eq!(ts.to_rfc3339(), "2019-03-02T01:10:00+00:00");
        assert!(parse_timestamp(None).unwrap().is_none());
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(matches!(
            parse_timestamp(Some("not-a-date")),
            Err(GlacierError::Timestamp(_))
        ));
    }
}
