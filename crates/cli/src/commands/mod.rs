//! Per-action routines.

pub mod delete;
pub mod inventory;
pub mod list;
pub mod status;

/// First ten characters of a job ID, for one-line summaries.
pub(crate) fn job_id_prefix(job_id: &str) -> String {
    job_id.chars().take(10).collect()
}
