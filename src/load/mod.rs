//! Coverage input loading.
//!
//! Turns a coverage file on disk into [`Package`] records ready to be added
//! to a [`Report`](crate::report::Report). Two formats are understood: the
//! JSON coverage document ([`json`]) and LCOV tracefiles ([`lcov`]).

pub mod json;
pub mod lcov;

pub use self::json::{parse_json_file, parse_json_str};
pub use self::lcov::{parse_lcov_file, parse_lcov_str, LcovOptions};

use crate::errors::LoadError;
use crate::model::Package;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Coverage input format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Detect from the file extension, then from the contents
    #[default]
    Auto,
    /// JSON coverage document
    Json,
    /// LCOV tracefile
    Lcov,
}

/// Options for [`load_packages`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub format: InputFormat,
    pub lcov: LcovOptions,
}

/// Load every package from a coverage file.
pub fn load_packages(path: &Path, options: &LoadOptions) -> Result<Vec<Package>, LoadError> {
    let format = match options.format {
        InputFormat::Auto => detect_format(path)?,
        explicit => explicit,
    };
    log::info!("Loading {} as {:?}", path.display(), format);

    match format {
        InputFormat::Json => parse_json_file(path),
        InputFormat::Lcov => parse_lcov_file(path, &options.lcov),
        InputFormat::Auto => Err(LoadError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Pick a concrete format for `path`.
///
/// `.json` is JSON and `.info`/`.lcov` is LCOV. Anything else is sniffed:
/// a document whose first non-blank character is `{` is JSON, otherwise LCOV.
pub fn detect_format(path: &Path) -> Result<InputFormat, LoadError> {
    if let Some(format) = format_from_extension(path) {
        return Ok(format);
    }

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = sniff_format(BufReader::new(file)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.ok_or_else(|| LoadError::UnknownFormat {
        path: path.to_path_buf(),
    })
}

fn format_from_extension(path: &Path) -> Option<InputFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(InputFormat::Json),
        "info" | "lcov" => Some(InputFormat::Lcov),
        _ => None,
    }
}

/// `None` for input that is empty or blank.
pub fn sniff_format<R: Read>(reader: BufReader<R>) -> std::io::Result<Option<InputFormat>> {
    for line in reader.lines() {
        let line = line?;
        if let Some(first) = line.trim_start().chars().next() {
            return Ok(Some(if first == '{' {
                InputFormat::Json
            } else {
                InputFormat::Lcov
            }));
        }
    }
    Ok(None)
}
