//! The `jobs` table row model.

use chrono::{Duration, NaiveDate};
use coldvault_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `jobs` table: one asynchronous Glacier job.
///
/// `status_response` always holds the most recent raw job-status payload;
/// a fetched inventory is cached separately in `inventory`. Rows are never
/// deleted by this tool.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Job {
    /// Opaque identifier assigned by Glacier at initiation. Immutable.
    pub job_id: String,
    pub vault_name: String,
    /// Job type as reported by the service, e.g. `InventoryRetrieval`.
    pub action: String,
    pub creation_date: Option<Timestamp>,
    /// Monotonic: once true it never reverts.
    pub has_completed: bool,
    /// Set at most once, on the first completed status observation.
    pub completion_date: Option<Timestamp>,
    pub status_code: String,
    /// Last job-status payload (JSON), kept as an audit trail.
    ///
    /// Written from the typed SDK response, so it carries the fields this
    /// tool tracks in Glacier's wire casing, not the service's complete
    /// DescribeJob body (retrieval parameters and the like are dropped at
    /// the SDK boundary).
    pub status_response: String,
    /// Cached inventory payload (JSON), populated by `get_inventory`.
    pub inventory: Option<String>,
    pub created_at: Timestamp,
}

impl Job {
    /// Whether this job's inventory is due for fetching.
    ///
    /// A completed job is eligible while its completion date falls on or
    /// after yesterday (date comparison, `>=`, so a job completed yesterday
    /// at 00:00 is still included). Older completions are assumed to have
    /// expired job output on the service side.
    pub fn inventory_fetch_due(&self, today: NaiveDate) -> bool {
        if !self.has_completed {
            return false;
        }
        match self.completion_date {
            Some(completed) => completed.date_naive() >= today - Duration::days(1),
            None => false,
        }
    }
}
