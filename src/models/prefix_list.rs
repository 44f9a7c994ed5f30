//! Managed prefix list data model.

use serde::{Deserialize, Serialize};

/// Placeholder used for missing names and descriptions in reports.
pub const NOT_AVAILABLE: &str = "N/A";

/// A managed prefix list as returned by `describe-managed-prefix-lists`.
///
/// Snapshot of the remote record; never mutated locally.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PrefixList {
    /// Opaque prefix list identifier (e.g. "pl-0123456789abcdef0").
    #[serde(rename = "PrefixListId")]
    pub id: String,
    /// Human label, not guaranteed unique or present.
    #[serde(rename = "PrefixListName", default)]
    pub name: Option<String>,
    /// Account id of the owner; provider-managed lists carry a vendor owner.
    #[serde(rename = "OwnerId", default)]
    pub owner_id: Option<String>,
}

impl PrefixList {
    /// Name for display and matching, with missing names rendered as "N/A".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// A single entry of a prefix list as returned by
/// `get-managed-prefix-list-entries`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Entry {
    /// Address block in CIDR notation, kept as the literal source text.
    #[serde(rename = "Cidr", default)]
    pub cidr: Option<String>,
    /// Free-text description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl Entry {
    /// CIDR text for display, with missing blocks rendered as "N/A".
    pub fn display_cidr(&self) -> &str {
        self.cidr.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Description for display, with missing text rendered as "N/A".
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
