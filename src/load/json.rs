//! JSON coverage documents.
//!
//! ```json
//! { "packages": [ { "name": "pkg", "functions": [
//!     { "name": "f", "file": "pkg/a.go", "line": 3,
//!       "statements": [ { "file": "pkg/a.go", "line": 4, "reached": 1 } ] } ] } ] }
//! ```

use crate::errors::LoadError;
use crate::model::{CoverageDocument, Package};
use std::path::Path;

pub fn parse_json_file(path: &Path) -> Result<Vec<Package>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json_str(&contents, path)
}

/// Parse a document held in memory; `path` is only used in errors.
pub fn parse_json_str(contents: &str, path: &Path) -> Result<Vec<Package>, LoadError> {
    let document: CoverageDocument =
        serde_json::from_str(contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "Loaded {} packages from {}",
        document.packages.len(),
        path.display()
    );
    Ok(document.packages)
}
