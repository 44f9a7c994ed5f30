//! CSV report writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory CSV reports are written into.
const REPORTS_DIR: &str = "reports";

/// How the caller asked for CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvMode {
    /// No CSV output requested.
    Disabled,
    /// `--csv` with no filename: generate a timestamped default name.
    DefaultName,
    /// `--csv FILE`: use the given filename.
    Named(String),
}

impl CsvMode {
    /// Convert the raw `--csv [FILE]` argument into an explicit mode.
    pub fn from_arg(arg: Option<Option<String>>) -> CsvMode {
        match arg {
            None => CsvMode::Disabled,
            Some(None) => CsvMode::DefaultName,
            Some(Some(filename)) => CsvMode::Named(filename),
        }
    }

    /// Resolve the output filename, if export is enabled.
    ///
    /// Default names are `<prefix>-YYYYMMDD_HHMMSS.csv`.
    pub fn resolve_filename(&self, prefix: &str) -> Option<String> {
        match self {
            CsvMode::Disabled => None,
            CsvMode::DefaultName => {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                Some(format!("{prefix}-{timestamp}.csv"))
            }
            CsvMode::Named(filename) => Some(filename.clone()),
        }
    }
}

/// Escape a field for CSV output.
///
/// Fields containing a comma, double quote or newline are enclosed in double
/// quotes, with embedded quotes doubled.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

/// Write header and rows as CSV to the given path.
pub fn write_csv_file(
    path: &Path,
    header: &[&str],
    data_rows: &[Vec<String>],
) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "{}", header.join(","))?;
    for row in data_rows {
        let line: Vec<String> = row.iter().map(|field| escape_csv_field(field)).collect();
        writeln!(file, "{}", line.join(","))?;
    }
    Ok(())
}

/// Write a CSV report under the `reports/` directory.
///
/// Returns the full path of the written file.
pub fn write_csv_report(
    csv_filename: &str,
    header: &[&str],
    data_rows: &[Vec<String>],
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(REPORTS_DIR)?;
    let path = PathBuf::from(REPORTS_DIR).join(csv_filename);
    write_csv_file(&path, header, data_rows)?;
    log::info!("CSV report written to {}", path.display());
    Ok(path)
}
