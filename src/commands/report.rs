//! The `report` command: load a coverage file and print the ranked report.

use crate::config::{load_config, load_config_from, CovrankConfig};
use crate::load::{load_packages, InputFormat, LoadOptions};
use crate::report::{print_report, Report};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Settings for one `report` invocation. CLI values override the config file.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub format: Option<InputFormat>,
    pub output: Option<PathBuf>,
    pub package_root: Option<PathBuf>,
    pub no_demangle: bool,
    pub config: Option<PathBuf>,
}

impl ReportConfig {
    /// Merge CLI overrides into the file configuration.
    pub fn load_options(&self, file_config: &CovrankConfig) -> LoadOptions {
        let mut options = file_config.load_options();
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(root) = &self.package_root {
            options.lcov.package_root = Some(root.clone());
        }
        if self.no_demangle {
            options.lcov.demangle = false;
        }
        options
    }
}

/// Build a report from every package in the input file.
pub fn build_report(config: &ReportConfig, file_config: &CovrankConfig) -> Result<Report> {
    let options = config.load_options(file_config);
    let packages = load_packages(&config.input, &options)
        .with_context(|| format!("Failed to load coverage from {}", config.input.display()))?;

    let mut report = Report::new();
    for package in packages {
        let name = package.name.clone();
        report
            .add_package(package)
            .with_context(|| format!("Cannot add package {}", name))?;
    }
    log::info!("Report holds {} packages", report.len());
    Ok(report)
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    let report = build_report(&config, &file_config)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            print_report(BufWriter::new(file), &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))
        }
        None => print_report(io::stdout().lock(), &report).context("Failed to write report"),
    }
}
