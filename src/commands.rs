//! Subcommand orchestration: fetch, filter, report.

use crate::aws::{self, AwsCliOptions};
use crate::cli::{AuditArgs, CommonArgs, ListArgs, PlCommand, SearchArgs};
use crate::error::PlError;
use crate::models::PrefixList;
use crate::output;
use crate::processing::{
    collect_matches, filter_large_cidr_entries, filter_owned_prefix_lists,
    filter_prefix_lists_by_name, search_entries_by_field, sorted_listing, Report,
};

/// CSV header for detail reports.
const DETAIL_HEADER: [&str; 4] = ["PLID", "PLName", "Cidr", "Description"];

/// CSV header for listing reports.
const LISTING_HEADER: [&str; 2] = ["PLID", "PLName"];

/// Run the requested subcommand.
pub fn run(command: &PlCommand) -> Result<(), PlError> {
    match command {
        PlCommand::Search(args) => run_search(args),
        PlCommand::Audit(args) => run_audit(args),
        PlCommand::List(args) => run_list(args),
    }
}

/// Resolve the account id, fetch all prefix lists and narrow them to the
/// customer-managed ones passing the name filters.
fn scoped_prefix_lists(
    common: &CommonArgs,
    opts: &AwsCliOptions,
) -> Result<Vec<PrefixList>, PlError> {
    let account_id = aws::get_caller_account_id(opts).map_err(PlError::AccountId)?;
    let prefix_lists =
        aws::describe_managed_prefix_lists(opts).map_err(PlError::DescribePrefixLists)?;
    let prefix_lists = filter_owned_prefix_lists(prefix_lists, Some(&account_id));
    let prefix_lists = filter_prefix_lists_by_name(
        prefix_lists,
        common.plfilter.as_deref(),
        common.plexclude.as_deref(),
    );
    if prefix_lists.is_empty() {
        return Err(PlError::NoPrefixLists);
    }
    log::info!(
        "Found {} prefix list(s) matching criteria.",
        prefix_lists.len()
    );
    Ok(prefix_lists)
}

fn run_search(args: &SearchArgs) -> Result<(), PlError> {
    let opts = args.common.aws_options();
    let prefix_lists = scoped_prefix_lists(&args.common, &opts)?;

    let (term, field) = args.term.criteria();
    let report = collect_matches(
        &prefix_lists,
        |pl| aws::get_prefix_list_entries(&opts, &pl.id),
        |entries| search_entries_by_field(entries, term, field),
    );

    output::print_detail_report("FINAL REPORT", &report);
    export_detail_csv(&args.common, "search_report", &report);
    Ok(())
}

fn run_audit(args: &AuditArgs) -> Result<(), PlError> {
    let opts = args.common.aws_options();
    let prefix_lists = scoped_prefix_lists(&args.common, &opts)?;

    let report = collect_matches(
        &prefix_lists,
        |pl| aws::get_prefix_list_entries(&opts, &pl.id),
        |entries| filter_large_cidr_entries(entries, args.maxcidr),
    );

    let title = format!("FINAL REPORT: IP blocks larger than /{}", args.maxcidr);
    output::print_detail_report(&title, &report);
    export_detail_csv(&args.common, "audit_report", &report);
    Ok(())
}

fn run_list(args: &ListArgs) -> Result<(), PlError> {
    let opts = args.common.aws_options();
    let prefix_lists = scoped_prefix_lists(&args.common, &opts)?;

    let listing = sorted_listing(&prefix_lists);
    output::print_listing_report("FINAL REPORT: customer-managed prefix lists", &listing);

    if let Some(filename) = args.common.csv_mode().resolve_filename("list_report") {
        let rows: Vec<Vec<String>> = listing
            .into_iter()
            .map(|(pl_id, pl_name)| vec![pl_id, pl_name])
            .collect();
        if let Err(e) = output::write_csv_report(&filename, &LISTING_HEADER, &rows) {
            log::error!("Failed to write CSV report: {e}");
        }
    }
    Ok(())
}

/// Export the detail report when `--csv` was given.
///
/// A write failure is logged but never fails the run; the console report
/// already went out.
fn export_detail_csv(common: &CommonArgs, prefix: &str, report: &Report) {
    if let Some(filename) = common.csv_mode().resolve_filename(prefix) {
        let rows: Vec<Vec<String>> = report
            .rows()
            .into_iter()
            .map(|row| vec![row.pl_id, row.pl_name, row.cidr, row.description])
            .collect();
        if let Err(e) = output::write_csv_report(&filename, &DETAIL_HEADER, &rows) {
            log::error!("Failed to write CSV report: {e}");
        }
    }
}
