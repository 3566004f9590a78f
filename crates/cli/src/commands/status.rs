//! `status` — poll incomplete jobs and print one line per tracked job.

use coldvault_db::models::Job;
use coldvault_db::repositories::JobRepo;
use coldvault_db::DbPool;
use coldvault_glacier::VaultService;

use super::job_id_prefix;

/// Poll Glacier for every job not yet known to be complete, apply the
/// response to the store, then print a summary line for every tracked job
/// whether or not it was just polled.
pub async fn run(pool: &DbPool, service: &dyn VaultService) -> anyhow::Result<()> {
    for job in JobRepo::list_all(pool).await? {
        let job = if job.has_completed {
            job
        } else {
            poll(pool, service, job).await?
        };
        println!("{}", summary_line(&job));
    }
    Ok(())
}

/// Fetch and apply the current status of one job.
///
/// The stored `status_response` is the re-serialized `JobDescription`,
/// i.e. the tracked field set rather than the service's complete response
/// body. A failed remote call is logged and the stored row is printed
/// as-is.
async fn poll(pool: &DbPool, service: &dyn VaultService, job: Job) -> anyhow::Result<Job> {
    let description = match service.describe_job(&job.vault_name, &job.job_id).await {
        Ok(description) => description,
        Err(e) => {
            tracing::error!(error = %e, job_id = %job.job_id, "Describing job failed");
            return Ok(job);
        }
    };

    let raw = serde_json::to_string(&description)?;
    let updated = JobRepo::apply_status(pool, &job.job_id, &description, &raw).await?;
    Ok(updated.unwrap_or(job))
}

/// One line per job: ID prefix, action, last status code.
pub fn summary_line(job: &Job) -> String {
    format!(
        "{}...:  {}  {}",
        job_id_prefix(&job.job_id),
        job.action,
        job.status_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn summary_line_truncates_the_job_id() {
        let job = Job {
            job_id: "HkF9p6o7yjRTvzCGTGBrLYWDvVD8".into(),
            vault_name: "backups".into(),
            action: "InventoryRetrieval".into(),
            creation_date: None,
            has_completed: false,
            completion_date: None,
            status_code: "InProgress".into(),
            status_response: "{}".into(),
            inventory: None,
            created_at: Utc::now(),
        };
        assert_eq!(
            summary_line(&job),
            "HkF9p6o7yj...:  InventoryRetrieval  InProgress"
        );
    }
}
