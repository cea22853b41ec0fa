//! `.covrank.toml` configuration.
//!
//! ```toml
//! [input]
//! format = "auto"        # auto | json | lcov
//!
//! [lcov]
//! package_root = "src"
//! demangle = true
//! ```
//!
//! [`load_config`] looks for the file in the working directory and its
//! ancestors. A missing file means defaults; a broken one is reported with a
//! warning and also falls back to defaults. A file named explicitly with
//! [`load_config_from`] must exist and parse.

use crate::errors::ConfigError;
use crate::load::{InputFormat, LcovOptions, LoadOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".covrank.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CovrankConfig {
    pub input: InputConfig,
    pub lcov: LcovConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub format: InputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LcovConfig {
    /// Package names are made relative to this directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_root: Option<PathBuf>,
    pub demangle: bool,
}

impl Default for LcovConfig {
    fn default() -> Self {
        Self {
            package_root: None,
            demangle: true,
        }
    }
}

impl CovrankConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            format: self.input.format,
            lcov: LcovOptions {
                package_root: self.lcov.package_root.clone(),
                demangle: self.lcov.demangle,
            },
        }
    }
}

/// Parse a config from TOML text.
pub fn parse_config(contents: &str) -> Result<CovrankConfig, String> {
    toml::from_str::<CovrankConfig>(contents).map_err(|e| e.to_string())
}

/// Load a specific config file.
pub fn load_config_from(path: &Path) -> Result<CovrankConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Directories from `start` upwards, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find and load the nearest `.covrank.toml` above `start`.
pub fn load_config_near(start: &Path) -> CovrankConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
        .and_then(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Find and load the nearest `.covrank.toml` above the working directory.
pub fn load_config() -> CovrankConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_near(&dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            CovrankConfig::default()
        }
    }
}

fn try_load_config_from_path(path: &Path) -> Option<CovrankConfig> {
    match load_config_from(path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Default config file contents written by `covrank init`.
pub fn default_config_toml() -> String {
    let mut contents = String::from("# covrank configuration\n\n");
    // Serializing plain data structures to TOML cannot fail
    contents.push_str(&toml::to_string_pretty(&CovrankConfig::default()).unwrap_or_default());
    contents
}
