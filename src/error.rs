//! Top-level error type for a plutils run.
//!
//! Per-entity failures (one list's entries, one malformed CIDR) are handled
//! locally and never surface here; these variants are the fatal conditions
//! that terminate the run.

use thiserror::Error;

use crate::aws::AwsError;

/// Fatal error conditions for a run.
#[derive(Debug, Error)]
pub enum PlError {
    /// Could not resolve the caller's AWS account identity.
    #[error("Failed to get AWS account ID: {0}")]
    AccountId(#[source] AwsError),

    /// Could not enumerate the managed prefix lists.
    #[error("Failed to retrieve managed prefix lists: {0}")]
    DescribePrefixLists(#[source] AwsError),

    /// No prefix lists survived ownership and name filtering.
    ///
    /// Not a malfunction, but the run terminates without a report.
    #[error("No prefix lists found after filtering.")]
    NoPrefixLists,
}
