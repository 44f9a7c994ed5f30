//! Logging setup for the binary.
//!
//! The library modules only use the `log` facade; the binary owns the
//! logger lifecycle and configures log4rs here: an always-on file appender
//! under `logs/` plus a console appender that `--quiet` throttles down to
//! errors. The final report is printed separately and is not affected.

use std::error::Error;
use std::path::PathBuf;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

/// Directory log files are written into.
const LOGS_DIR: &str = "logs";

/// Log line format, e.g. "2026-08-29 10:15:42 - INFO - message".
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}";

/// Initialize logging to `logs/plutils_<command>-YYYYMMDD_HHMMSS.log` and
/// the console. Returns the log file path.
pub fn init_logging(command: &str, quiet: bool) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(LOGS_DIR)?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let logfile = PathBuf::from(LOGS_DIR).join(format!("plutils_{command}-{timestamp}.log"));

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&logfile)?;

    let console_level = if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(file)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("console", Box::new(console)),
        )
        .build(
            Root::builder()
                .appender("logfile")
                .appender("console")
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initiated. Output log file: {}", logfile.display());
    Ok(logfile)
}
