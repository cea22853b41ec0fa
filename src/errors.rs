//! Error types for report building, input loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or printing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A package with this name is already part of the report. Results for
    /// the same package are never merged.
    #[error("package already exists: {name} (result merging is not supported)")]
    DuplicatePackage { name: String },

    /// Writing the report to its sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn duplicate_package(name: impl Into<String>) -> Self {
        Self::DuplicatePackage { name: name.into() }
    }

    pub fn is_duplicate_package(&self) -> bool {
        matches!(self, Self::DuplicatePackage { .. })
    }
}

/// Errors raised while turning a coverage file into packages.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read coverage file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON coverage document {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid LCOV tracefile {path}: {message}")]
    Lcov { path: PathBuf, message: String },

    #[error("Cannot determine coverage format of {path}")]
    UnknownFormat { path: PathBuf },
}

/// Errors raised while loading `.covrank.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
