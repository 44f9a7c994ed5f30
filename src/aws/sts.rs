//! Caller identity resolution via the AWS CLI.

use serde::Deserialize;

use super::cli;
use super::error::AwsError;
use super::AwsCliOptions;

/// Envelope for `aws sts get-caller-identity` output.
#[derive(Deserialize, Debug)]
struct CallerIdentity {
    #[serde(rename = "Account")]
    account: String,
}

/// Resolve the AWS account id of the caller's credentials.
///
/// This id drives the customer-managed ownership filter.
pub fn get_caller_account_id(opts: &AwsCliOptions) -> Result<String, AwsError> {
    let output = cli::run(&format!(
        "aws sts get-caller-identity --output json{}",
        opts.cli_suffix()
    ))?;
    let identity: CallerIdentity = serde_json::from_str(&output).map_err(|e| {
        log::error!("Error parsing caller identity: {e}");
        AwsError::Json {
            path: ".".to_string(),
            source: e,
        }
    })?;
    log::info!("Resolved AWS account id: {}", identity.account);
    Ok(identity.account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caller_identity() {
        let json = r#"{
            "UserId": "AIDAEXAMPLE",
            "Account": "111111111111",
            "Arn": "arn:aws:iam::111111111111:user/example"
        }"#;
        let identity: CallerIdentity =
            serde_json::from_str(json).expect("Error parsing caller identity");
        assert_eq!(identity.account, "111111111111");
    }
}
