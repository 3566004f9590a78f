//! Domain model structs for the job store.

pub mod job;

pub use job::Job;
