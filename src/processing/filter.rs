//! Prefix list ownership and name filtering.

use crate::models::PrefixList;

/// Restrict prefix lists to those owned by the given account id.
///
/// Ownership is exact string equality. A missing `account_id` means no
/// constraint and returns the input unchanged.
pub fn filter_owned_prefix_lists(
    prefix_lists: Vec<PrefixList>,
    account_id: Option<&str>,
) -> Vec<PrefixList> {
    let Some(account_id) = account_id else {
        return prefix_lists;
    };
    let filtered: Vec<PrefixList> = prefix_lists
        .into_iter()
        .filter(|pl| pl.owner_id.as_deref() == Some(account_id))
        .collect();
    log::info!(
        "Found {} customer-managed prefix list(s) for account {account_id}",
        filtered.len()
    );
    filtered
}

/// Apply the optional include/exclude name filters.
///
/// A list is kept when its name contains `include` (if given) and does NOT
/// contain `exclude` (if given), both case-insensitive. Missing names match
/// as the literal "N/A". Input order is preserved.
pub fn filter_prefix_lists_by_name(
    prefix_lists: Vec<PrefixList>,
    include: Option<&str>,
    exclude: Option<&str>,
) -> Vec<PrefixList> {
    let include = include.map(str::to_lowercase);
    let exclude = exclude.map(str::to_lowercase);

    prefix_lists
        .into_iter()
        .filter(|pl| {
            let name = pl.display_name().to_lowercase();
            if let Some(include) = &include {
                if !name.contains(include.as_str()) {
                    return false;
                }
            }
            if let Some(exclude) = &exclude {
                if name.contains(exclude.as_str()) {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pl(id: &str, name: &str, owner: &str) -> PrefixList {
        PrefixList {
            id: id.to_string(),
            name: Some(name.to_string()),
            owner_id: Some(owner.to_string()),
        }
    }

    fn sample_lists() -> Vec<PrefixList> {
        vec![
            pl("pl-1", "TestPL", "111111111111"),
            pl("pl-2", "VendorPL", "111111111111"),
            pl("pl-3", "AnotherPL", "222222222222"),
        ]
    }

    #[test]
    fn test_ownership_filter() {
        let owned = filter_owned_prefix_lists(sample_lists(), Some("111111111111"));
        assert_eq!(owned.len(), 2);
        for pl in &owned {
            assert_eq!(pl.owner_id.as_deref(), Some("111111111111"));
        }
    }

    #[test]
    fn test_ownership_filter_passthrough() {
        let all = filter_owned_prefix_lists(sample_lists(), None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_ownership_filter_missing_owner() {
        let mut lists = sample_lists();
        lists[0].owner_id = None;
        let owned = filter_owned_prefix_lists(lists, Some("111111111111"));
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, "pl-2");
    }

    #[test]
    fn test_name_filter_include_and_exclude() {
        let result = filter_prefix_lists_by_name(sample_lists(), Some("PL"), Some("Another"));
        let names: Vec<&str> = result.iter().map(|pl| pl.display_name()).collect();
        assert_eq!(names, vec!["TestPL", "VendorPL"]);
    }

    #[test]
    fn test_name_filter_include_only() {
        let result = filter_prefix_lists_by_name(sample_lists(), Some("Test"), None);
        let names: Vec<&str> = result.iter().map(|pl| pl.display_name()).collect();
        assert_eq!(names, vec!["TestPL"]);
    }

    #[test]
    fn test_name_filter_exclude_only() {
        let result = filter_prefix_lists_by_name(sample_lists(), None, Some("Vendor"));
        let names: Vec<&str> = result.iter().map(|pl| pl.display_name()).collect();
        assert_eq!(names, vec!["TestPL", "AnotherPL"]);
    }

    #[test]
    fn test_name_filter_case_insensitive() {
        let result = filter_prefix_lists_by_name(sample_lists(), Some("testpl"), None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "pl-1");
    }

    #[test]
    fn test_name_filter_no_criteria_passthrough() {
        let result = filter_prefix_lists_by_name(sample_lists(), None, None);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_name_filter_missing_name_matches_placeholder() {
        let lists = vec![PrefixList {
            id: "pl-9".to_string(),
            name: None,
            owner_id: None,
        }];
        // A record without a name matches "N/A", never crashes.
        let result = filter_prefix_lists_by_name(lists.clone(), Some("n/a"), None);
        assert_eq!(result.len(), 1);
        let result = filter_prefix_lists_by_name(lists, None, Some("N/A"));
        assert!(result.is_empty());
    }
}
