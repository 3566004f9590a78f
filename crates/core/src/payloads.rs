//! Glacier payload DTOs.
//!
//! Field names serialize with Glacier's wire casing (`VaultARN`,
//! `ArchiveList`, `StatusCode`, ...) so that payloads persisted in the job
//! store read exactly like the service's own JSON responses.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// One vault row from a `ListVaults` page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultSummary {
    #[serde(rename = "VaultName")]
    pub vault_name: String,
    #[serde(rename = "NumberOfArchives")]
    pub number_of_archives: i64,
    #[serde(rename = "SizeInBytes")]
    pub size_in_bytes: i64,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
}

/// One page of vaults plus the marker for the next page, if any.
#[derive(Debug, Clone)]
pub struct VaultPage {
    pub vaults: Vec<VaultSummary>,
    pub marker: Option<String>,
}

/// Response to a successfully initiated inventory-retrieval job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiatedJob {
    #[serde(rename = "JobId")]
    pub job_id: String,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Status of a Glacier job as reported by `DescribeJob`.
///
/// `completion_date` is absent until the service reports the job complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "StatusCode")]
    pub status_code: String,
    #[serde(rename = "Completed")]
    pub completed: bool,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    #[serde(
        rename = "CompletionDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_date: Option<Timestamp>,
}

/// Full inventory payload returned by a completed inventory-retrieval job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultInventory {
    #[serde(rename = "VaultARN")]
    pub vault_arn: String,
    #[serde(rename = "InventoryDate", skip_serializing_if = "Option::is_none")]
    pub inventory_date: Option<Timestamp>,
    #[serde(rename = "ArchiveList")]
    pub archive_list: Vec<InventoryArchive>,
}

/// One archive entry inside a vault inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryArchive {
    #[serde(rename = "ArchiveId")]
    pub archive_id: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "ArchiveDescription", default)]
    pub description: String,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    #[serde(
        rename = "SHA256TreeHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sha256_tree_hash: Option<String>,
}
