//! Remote service boundary for AWS S3 Glacier.
//!
//! [`VaultService`] is the trait the CLI routines program against;
//! [`GlacierClient`] is the production implementation over the AWS SDK.
//! Glacier is treated as a black box queried synchronously, one call at a
//! time — no retries, no backoff.

pub mod client;
pub mod service;

pub use client::GlacierClient;
pub use service::{GlacierError, VaultService};
