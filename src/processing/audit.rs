//! CIDR size classification of prefix list entries.

use crate::models::{Cidr, Entry};

/// Keep the entries whose address block is larger than `/max_prefix_len`.
///
/// A block is larger when its parsed prefix length is strictly less than
/// `max_prefix_len` (a /24 covers more addresses than a /29). Entries whose
/// block does not parse as an IPv4 network are skipped with a logged
/// diagnostic. Input order is preserved.
pub fn filter_large_cidr_entries(entries: Vec<Entry>, max_prefix_len: u8) -> Vec<Entry> {
    let filtered: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| {
            let Some(cidr_text) = entry.cidr.as_deref() else {
                return false;
            };
            match Cidr::parse(cidr_text) {
                Ok(cidr) => cidr.prefix_len < max_prefix_len,
                Err(e) => {
                    log::warn!("Invalid CIDR format '{cidr_text}': {e}");
                    false
                }
            }
        })
        .collect();
    log::info!(
        "Filtered {} entries with CIDR larger than /{max_prefix_len}",
        filtered.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(cidr: &str) -> Entry {
        Entry {
            cidr: Some(cidr.to_string()),
            description: Some("test".to_string()),
        }
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry("10.0.0.0/24"),
            entry("10.0.1.0/29"),
            entry("10.0.2.0/28"),
            entry("8.8.8.8/32"),
        ]
    }

    #[test]
    fn test_threshold_29() {
        let matches = filter_large_cidr_entries(sample_entries(), 29);
        let cidrs: Vec<&str> = matches.iter().map(|e| e.display_cidr()).collect();
        assert_eq!(cidrs, vec!["10.0.0.0/24", "10.0.2.0/28"]);
    }

    #[test]
    fn test_threshold_28() {
        let matches = filter_large_cidr_entries(sample_entries(), 28);
        let cidrs: Vec<&str> = matches.iter().map(|e| e.display_cidr()).collect();
        assert_eq!(cidrs, vec!["10.0.0.0/24"]);
    }

    #[test]
    fn test_threshold_0_matches_nothing() {
        let matches = filter_large_cidr_entries(sample_entries(), 0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_threshold_32_excludes_only_host_routes() {
        let matches = filter_large_cidr_entries(sample_entries(), 32);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|e| e.display_cidr() != "8.8.8.8/32"));
    }

    #[test]
    fn test_equal_prefix_is_not_oversized() {
        // Strict less-than: a /29 is not larger than /29.
        let matches = filter_large_cidr_entries(vec![entry("10.0.1.0/29")], 29);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_invalid_cidr_skipped() {
        let entries = vec![
            entry("not-a-cidr"),
            entry("10.0.0.0"),
            entry("10.0.0.0/ab"),
            Entry {
                cidr: None,
                description: Some("no block".to_string()),
            },
            entry("10.0.0.0/8"),
        ];
        let matches = filter_large_cidr_entries(entries, 29);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].display_cidr(), "10.0.0.0/8");
    }

    #[test]
    fn test_host_bits_normalized_not_rejected() {
        let matches = filter_large_cidr_entries(vec![entry("10.0.0.7/8")], 29);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_classifier_is_pure() {
        let once = filter_large_cidr_entries(sample_entries(), 29);
        let twice = filter_large_cidr_entries(sample_entries(), 29);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.display_cidr(), b.display_cidr());
        }
    }
}
