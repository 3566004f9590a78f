//! Integration tests for the job store.
//!
//! Exercises `JobRepo` against a real SQLite database:
//! - Insert and duplicate-key behaviour
//! - Incomplete/completed partitioning
//! - Status application: idempotence, monotonic completion, first-writer
//!   semantics for the completion date
//! - Inventory caching

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use coldvault_core::payloads::JobDescription;
use coldvault_db::repositories::JobRepo;
use sqlx::SqlitePool;

fn in_progress() -> JobDescription {
    JobDescription {
        action: "InventoryRetrieval".into(),
        status_code: "InProgress".into(),
        completed: false,
        creation_date: Some(Utc.with_ymd_and_hms(2019, 3, 1, 19, 20, 41).unwrap()),
        completion_date: None,
    }
}

fn succeeded() -> JobDescription {
    JobDescription {
        completed: true,
        status_code: "Succeeded".into(),
        completion_date: Some(Utc.with_ymd_and_hms(2019, 3, 2, 1, 10, 0).unwrap()),
        ..in_progress()
    }
}

#[sqlx::test]
async fn create_populates_defaults(pool: SqlitePool) {
    let job = JobRepo::create(&pool, "JOB-1", "backups", r#"{"JobId":"JOB-1"}"#)
        .await
        .unwrap();

    assert_eq!(job.job_id, "JOB-1");
    assert_eq!(job.vault_name, "backups");
    assert!(!job.has_completed);
    assert_eq!(job.action, "");
    assert_eq!(job.status_code, "");
    assert!(job.completion_date.is_none());
    assert!(job.inventory.is_none());

    let found = JobRepo::find_by_id(&pool, "JOB-1").await.unwrap().unwrap();
    assert_eq!(found, job);
}

#[sqlx::test]
async fn duplicate_job_id_is_rejected(pool: SqlitePool) {
    JobRepo::create(&pool, "JOB-1", "backups", "{}").await.unwrap();
    let err = JobRepo::create(&pool, "JOB-1", "backups", "{}")
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.is_unique_violation());
}

#[sqlx::test]
async fn incomplete_and_completed_partition_the_job_set(pool: SqlitePool) {
    for id in ["JOB-1", "JOB-2", "JOB-3"] {
        JobRepo::create(&pool, id, "backups", "{}").await.unwrap();
    }
    JobRepo::apply_status(&pool, "JOB-2", &succeeded(), "{}")
        .await
        .unwrap();

    let incomplete = JobRepo::list_incomplete(&pool).await.unwrap();
    let completed = JobRepo::list_completed(&pool).await.unwrap();
    let all = JobRepo::list_all(&pool).await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(incomplete.len() + completed.len(), all.len());
    assert!(incomplete.iter().all(|j| !j.has_completed));
    assert!(completed.iter().all(|j| j.has_completed));
    assert_eq!(completed[0].job_id, "JOB-2");
}

#[sqlx::test]
async fn apply_status_is_idempotent(pool: SqlitePool) {
    JobRepo::create(&pool, "JOB-1", "backups", "{}").await.unwrap();

    let raw = serde_json::to_string(&succeeded()).unwrap();
    let first = JobRepo::apply_status(&pool, "JOB-1", &succeeded(), &raw)
        .await
        .unwrap()
        .unwrap();
    let second = JobRepo::apply_status(&pool, "JOB-1", &succeeded(), &raw)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, second);
    assert!(second.has_completed);
    assert_eq!(second.status_code, "Succeeded");
    assert_eq!(second.status_response, raw);
}

#[sqlx::test]
async fn completion_never_reverts(pool: SqlitePool) {
    JobRepo::create(&pool, "JOB-1", "backups", "{}").await.unwrap();
    JobRepo::apply_status(&pool, "JOB-1", &succeeded(), "{}")
        .await
        .unwrap();

    // A stale response claiming the job is still running must not roll the
    // row back.
    let job = JobRepo::apply_status(&pool, "JOB-1", &in_progress(), "{}")
        .await
        .unwrap()
        .unwrap();

    assert!(job.has_completed);
    assert_eq!(job.completion_date, succeeded().completion_date);
    // The rest of the response still applies as usual.
    assert_eq!(job.status_code, "InProgress");
}

#[sqlx::test]
async fn completion_date_keeps_its_first_value(pool: SqlitePool) {
    JobRepo::create(&pool, "JOB-1", "backups", "{}").await.unwrap();
    JobRepo::apply_status(&pool, "JOB-1", &succeeded(), "{}")
        .await
        .unwrap();

    let later = JobDescription {
        completion_date: Some(Utc.with_ymd_and_hms(2019, 3, 5, 12, 0, 0).unwrap()),
        ..succeeded()
    };
    let job = JobRepo::apply_status(&pool, "JOB-1", &later, "{}")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(job.completion_date, succeeded().completion_date);
}

#[sqlx::test]
async fn apply_status_to_unknown_job_is_none(pool: SqlitePool) {
    let result = JobRepo::apply_status(&pool, "NOPE", &succeeded(), "{}")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn cache_inventory_fills_its_own_column(pool: SqlitePool) {
    JobRepo::create(&pool, "JOB-1", "backups", r#"{"JobId":"JOB-1"}"#)
        .await
        .unwrap();
    JobRepo::apply_status(&pool, "JOB-1", &succeeded(), r#"{"Completed":true}"#)
        .await
        .unwrap();

    let inventory = r#"{"VaultARN":"arn:aws:glacier:::vaults/backups","ArchiveList":[]}"#;
    let job = JobRepo::cache_inventory(&pool, "JOB-1", inventory)
        .await
        .unwrap()
        .unwrap();

    // The status payload is untouched; the inventory lives in its own column.
    assert_eq!(job.inventory.as_deref(), Some(inventory));
    assert_eq!(job.status_response, r#"{"Completed":true}"#);
}
