//! Managed prefix list queries via the AWS CLI.

use serde::Deserialize;

use super::cli;
use super::error::AwsError;
use super::AwsCliOptions;
use crate::models::{Entry, PrefixList};

/// Envelope for `aws ec2 describe-managed-prefix-lists` output.
#[derive(Deserialize, Debug, Default)]
struct PrefixListPage {
    #[serde(rename = "PrefixLists", default)]
    prefix_lists: Vec<PrefixList>,
}

/// Envelope for `aws ec2 get-managed-prefix-list-entries` output.
#[derive(Deserialize, Debug, Default)]
struct EntryPage {
    #[serde(rename = "Entries", default)]
    entries: Vec<Entry>,
}

/// Retrieve all managed prefix lists visible to the caller's credentials.
pub fn describe_managed_prefix_lists(
    opts: &AwsCliOptions,
) -> Result<Vec<PrefixList>, AwsError> {
    log::info!("Retrieving all managed prefix lists...");
    let output = cli::run(&format!(
        "aws ec2 describe-managed-prefix-lists --output json{}",
        opts.cli_suffix()
    ))?;
    let page: PrefixListPage = parse_json(&output)?;
    Ok(page.prefix_lists)
}

/// Retrieve the entries of a single prefix list.
///
/// Fails with [`AwsError::CommandFailed`] for an unknown or deleted id;
/// callers treat that as zero entries rather than aborting the run.
pub fn get_prefix_list_entries(
    opts: &AwsCliOptions,
    prefix_list_id: &str,
) -> Result<Vec<Entry>, AwsError> {
    let output = cli::run(&format!(
        "aws ec2 get-managed-prefix-list-entries --prefix-list-id {prefix_list_id} --output json{}",
        opts.cli_suffix()
    ))?;
    let page: EntryPage = parse_json(&output)?;
    Ok(page.entries)
}

/// Parse a JSON payload, reporting the path of any shape mismatch.
fn parse_json<'de, T: Deserialize<'de>>(output: &'de str) -> Result<T, AwsError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        log::error!("Error parsing JSON at '{path}': {e}");
        AwsError::Json {
            path,
            source: e.into_inner(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix_list_page() {
        let json = r#"{
            "PrefixLists": [
                {
                    "PrefixListId": "pl-111",
                    "AddressFamily": "IPv4",
                    "State": "create-complete",
                    "PrefixListName": "TestPL",
                    "MaxEntries": 25,
                    "Version": 3,
                    "OwnerId": "111111111111"
                },
                {
                    "PrefixListId": "pl-aws",
                    "PrefixListName": "com.amazonaws.global.cloudfront.origin-facing",
                    "OwnerId": "AWS"
                }
            ]
        }"#;
        let page: PrefixListPage = parse_json(json).expect("Error parsing prefix list page");
        assert_eq!(page.prefix_lists.len(), 2);
        assert_eq!(page.prefix_lists[0].id, "pl-111");
        assert_eq!(page.prefix_lists[0].display_name(), "TestPL");
        assert_eq!(page.prefix_lists[1].owner_id.as_deref(), Some("AWS"));
    }

    #[test]
    fn test_parse_entry_page() {
        let json = r#"{
            "Entries": [
                {"Cidr": "10.0.0.0/8", "Description": "Corporate network"},
                {"Cidr": "192.168.1.0/24"}
            ]
        }"#;
        let page: EntryPage = parse_json(json).expect("Error parsing entry page");
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].display_cidr(), "10.0.0.0/8");
        assert_eq!(page.entries[1].display_description(), "N/A");
    }

    #[test]
    fn test_parse_empty_page() {
        let page: PrefixListPage = parse_json(r#"{"PrefixLists": []}"#).expect("Error parsing");
        assert!(page.prefix_lists.is_empty());
    }

    #[test]
    fn test_parse_json_shape_mismatch() {
        let result: Result<PrefixListPage, _> = parse_json(r#"{"PrefixLists": [{"Bogus": 1}]}"#);
        assert!(result.is_err());
    }
}
