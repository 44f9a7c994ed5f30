//! AWS CLI interaction.
//!
//! This module handles all AWS-related operations:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`ec2`] - Managed prefix list queries
//! - [`sts`] - Caller identity resolution

mod cli;
mod ec2;
mod error;
mod sts;

// Re-export public types and functions
pub use cli::run;
pub use ec2::{describe_managed_prefix_lists, get_prefix_list_entries};
pub use error::AwsError;
pub use sts::get_caller_account_id;

/// Session options forwarded to every AWS CLI invocation.
///
/// Profile and region left unset fall through to the CLI's own
/// environment and config resolution.
#[derive(Debug, Clone, Default)]
pub struct AwsCliOptions {
    /// AWS CLI profile name.
    pub profile: Option<String>,
    /// AWS region name.
    pub region: Option<String>,
}

impl AwsCliOptions {
    /// Build options from optional CLI flags.
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        AwsCliOptions { profile, region }
    }

    /// Render the trailing `--profile`/`--region` arguments, if any.
    fn cli_suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(profile) = &self.profile {
            suffix.push_str(&format!(" --profile {profile}"));
        }
        if let Some(region) = &self.region {
            suffix.push_str(&format!(" --region {region}"));
        }
        suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_suffix_empty() {
        assert_eq!(AwsCliOptions::default().cli_suffix(), "");
    }

    #[test]
    fn test_cli_suffix_profile_and_region() {
        let opts = AwsCliOptions::new(Some("dev".to_string()), Some("us-east-1".to_string()));
        assert_eq!(opts.cli_suffix(), " --profile dev --region us-east-1");
    }

    #[test]
    fn test_cli_suffix_region_only() {
        let opts = AwsCliOptions::new(None, Some("eu-west-1".to_string()));
        assert_eq!(opts.cli_suffix(), " --region eu-west-1");
    }
}
