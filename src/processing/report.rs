//! Result aggregation and report shaping.
//!
//! Combines per-list filtered entries into an ordered collection and
//! projects them into flat rows for console display and CSV export.

use crate::aws::AwsError;
use crate::models::{Entry, PrefixList};

/// Matching entries of a single prefix list.
#[derive(Debug, Clone)]
pub struct PlMatches {
    /// The prefix list the entries belong to.
    pub pl: PrefixList,
    /// Entries that passed the active entry criterion.
    pub entries: Vec<Entry>,
}

/// Detail report: retained lists in fetch order, zero-match lists omitted.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Per-list results in the order the lists were fetched.
    pub results: Vec<PlMatches>,
}

/// One flattened row of the tabular projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub pl_id: String,
    pub pl_name: String,
    pub cidr: String,
    pub description: String,
}

impl Report {
    /// True when no list contributed any matching entry.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Flatten to one row per (list, entry) pair, missing fields as "N/A".
    pub fn rows(&self) -> Vec<ReportRow> {
        self.results
            .iter()
            .flat_map(|result| {
                result.entries.iter().map(|entry| ReportRow {
                    pl_id: result.pl.id.clone(),
                    pl_name: result.pl.display_name().to_string(),
                    cidr: entry.display_cidr().to_string(),
                    description: entry.display_description().to_string(),
                })
            })
            .collect()
    }
}

/// Fetch and filter the entries of each prefix list, keeping the lists that
/// contribute at least one match.
///
/// A failed entry fetch for one list is logged and contributes zero entries;
/// processing continues with the remaining lists.
pub fn collect_matches<F, P>(
    prefix_lists: &[PrefixList],
    mut fetch_entries: F,
    mut entry_filter: P,
) -> Report
where
    F: FnMut(&PrefixList) -> Result<Vec<Entry>, AwsError>,
    P: FnMut(Vec<Entry>) -> Vec<Entry>,
{
    let mut results = Vec::new();
    for pl in prefix_lists {
        log::info!("Processing prefix list: {}", pl.id);
        let entries = match fetch_entries(pl) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Error retrieving entries for {}: {e}", pl.id);
                Vec::new()
            }
        };
        let matching = entry_filter(entries);
        if matching.is_empty() {
            log::info!("No matching entries in {}", pl.id);
        } else {
            log::info!(
                "Found {} matching entr{} in {}",
                matching.len(),
                if matching.len() == 1 { "y" } else { "ies" },
                pl.id
            );
            results.push(PlMatches {
                pl: pl.clone(),
                entries: matching,
            });
        }
        log::info!("{}", "-".repeat(60));
    }
    Report { results }
}

/// Project prefix lists to (id, name) pairs sorted ascending by name,
/// case-insensitive, ties kept in original fetch order.
///
/// List ids are opaque, so the name is the only human-meaningful key.
pub fn sorted_listing(prefix_lists: &[PrefixList]) -> Vec<(String, String)> {
    let mut listing: Vec<(String, String)> = prefix_lists
        .iter()
        .map(|pl| (pl.id.clone(), pl.display_name().to_string()))
        .collect();
    listing.sort_by_key(|(_, name)| name.to_lowercase());
    listing
}
