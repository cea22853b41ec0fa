// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod load;
pub mod model;
pub mod report;

// Re-export commonly used types
pub use crate::errors::{ConfigError, LoadError, ReportError};
pub use crate::load::{load_packages, InputFormat, LoadOptions};
pub use crate::model::{CoverageDocument, Function, Package, Statement};
pub use crate::report::{print_report, render_report, RankedFunction, Report};
