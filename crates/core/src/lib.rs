//! Shared types for the coldvault workspace: timestamps, Glacier payload
//! DTOs, and the archive-ID log parser.

pub mod archive_log;
pub mod payloads;
pub mod types;
