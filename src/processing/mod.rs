//! Prefix list filtering and aggregation logic.
//!
//! This module contains the business logic for deciding which prefix lists
//! and entries are in scope for an invocation:
//! - [`filter`] - ownership and name include/exclude filtering
//! - [`search`] - free-text search over entry fields
//! - [`audit`] - CIDR size classification
//! - [`report`] - result aggregation and row projection

mod audit;
mod filter;
mod report;
mod search;

// Re-export public functions
pub use audit::filter_large_cidr_entries;
pub use filter::{filter_owned_prefix_lists, filter_prefix_lists_by_name};
pub use report::{collect_matches, sorted_listing, PlMatches, Report, ReportRow};
pub use search::{search_entries_by_field, SearchField};
