//! Repository for the `jobs` table.
//!
//! Status updates are written so that re-applying the same service response
//! is a no-op: `has_completed` only ever moves false -> true and
//! `completion_date` keeps its first value.

use chrono::Utc;
use coldvault_core::payloads::JobDescription;
use sqlx::SqlitePool;

use crate::models::Job;

/// Column list for `jobs` queries.
const COLUMNS: &str = "\
    job_id, vault_name, action, creation_date, has_completed, \
    completion_date, status_code, status_response, inventory, created_at";

/// Provides read/write operations for tracked Glacier jobs.
pub struct JobRepo;

impl JobRepo {
    /// Insert a freshly initiated job.
    ///
    /// Only `job_id`, `vault_name` and the raw initiation payload are known
    /// at this point; everything else takes its column default. Inserting a
    /// `job_id` that already exists surfaces the unique-constraint error.
    pub async fn create(
        pool: &SqlitePool,
        job_id: &str,
        vault_name: &str,
        status_response: &str,
    ) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (job_id, vault_name, status_response, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(job_id)
            .bind(vault_name)
            .bind(status_response)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &SqlitePool, job_id: &str) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE job_id = ?");
        sqlx::query_as::<_, Job>(&query)
            .bind(job_id)
            .fetch_optional(pool)
            .await
    }

    /// List every tracked job, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY created_at, job_id");
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    /// List jobs the service has not yet reported complete.
    pub async fn list_incomplete(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
        Self::list_by_completion(pool, false).await
    }

    /// List jobs the service has reported complete.
    pub async fn list_completed(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
        Self::list_by_completion(pool, true).await
    }

    async fn list_by_completion(
        pool: &SqlitePool,
        completed: bool,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs WHERE has_completed = ? ORDER BY created_at, job_id"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(completed)
            .fetch_all(pool)
            .await
    }

    /// Apply a `DescribeJob` response to a tracked job.
    ///
    /// `has_completed` is monotonic (`MAX` against the stored flag) and
    /// `completion_date` keeps the first value ever written (`COALESCE`
    /// favouring the stored column), so a stale or incomplete-looking
    /// response can never roll a finished job back. Returns the updated
    /// row, or `None` when the job is not tracked.
    pub async fn apply_status(
        pool: &SqlitePool,
        job_id: &str,
        description: &JobDescription,
        raw_response: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET \
                 action = ?, \
                 status_code = ?, \
                 creation_date = COALESCE(?, creation_date), \
                 has_completed = MAX(has_completed, ?), \
                 completion_date = COALESCE(completion_date, ?), \
                 status_response = ? \
             WHERE job_id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&description.action)
            .bind(&description.status_code)
            .bind(description.creation_date)
            .bind(description.completed)
            .bind(description.completion_date)
            .bind(raw_response)
            .bind(job_id)
            .fetch_optional(pool)
            .await
    }

    /// Cache a fetched inventory payload on its job row.
    ///
    /// Returns the updated row, or `None` when the job is not tracked.
    pub async fn cache_inventory(
        pool: &SqlitePool,
        job_id: &str,
        inventory_json: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET inventory = ? WHERE job_id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(inventory_json)
            .bind(job_id)
            .fetch_optional(pool)
            .await
    }
}
