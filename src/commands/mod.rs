//! CLI command implementations.
//!
//! - **report**: Load a coverage file and print the ranked report
//! - **init**: Write a default `.covrank.toml`

pub mod init;
pub mod report;

pub use init::init_config;
pub use report::{build_report, handle_report, ReportConfig};
