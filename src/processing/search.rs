//! Free-text search over prefix list entries.

use crate::models::Entry;

/// Entry field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the free-text description.
    Description,
    /// Match against the literal CIDR text. Substring semantics, not
    /// range containment, so "10.0" also matches "110.0.0.0/8".
    Cidr,
}

/// Filter entries whose selected field contains the search term as a
/// case-insensitive substring.
///
/// Entries missing the selected field are excluded. Input order is
/// preserved.
pub fn search_entries_by_field(
    entries: Vec<Entry>,
    search_value: &str,
    field: SearchField,
) -> Vec<Entry> {
    let lower_search = search_value.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| {
            let value = match field {
                SearchField::Description => entry.description.as_deref(),
                SearchField::Cidr => entry.cidr.as_deref(),
            };
            match value {
                Some(value) => value.to_lowercase().contains(&lower_search),
                None => false,
            }
        })
        .collect()
}
