//! Domain models for prefix list search and audit.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Cidr`] - IPv4 address block with CIDR notation support
//! - [`PrefixList`] and [`Entry`] - managed prefix list records

mod cidr;
mod prefix_list;

// Re-export public types
pub use cidr::{get_cidr_mask, network_addr, Cidr, CidrError, MAX_LENGTH};
pub use prefix_list::{Entry, PrefixList, NOT_AVAILABLE};
