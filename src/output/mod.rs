//! Output formatting for prefix list reports.
//!
//! This module handles formatting and emitting report data:
//! - [`console`] - final report printing to stdout and log
//! - [`csv`] - CSV export under the reports directory

mod console;
mod csv;

pub use console::{print_detail_report, print_listing_report};
pub use csv::{escape_csv_field, write_csv_file, write_csv_report, CsvMode};
