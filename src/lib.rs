// cargo watch -x 'fmt' -x 'run'  // 'run -- search --name vendor'

pub mod aws;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::PlError;
pub use models::{Entry, PrefixList};
