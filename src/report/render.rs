//! Text rendering of a [`Report`].
//!
//! One row per function, in ranked order, followed by a blank line after
//! each package:
//!
//! ```text
//! <package>/<file>:<line>\t <function>\t <percent>% (<reached>/<total>)
//! ```
//!
//! All rows of the report go through one [`TabWriter`], so columns line up
//! across package boundaries.

use super::ranking::{rank_functions, RankedFunction};
use super::tabwriter::TabWriter;
use super::Report;
use crate::model::Package;
use std::io::{self, Write};
use std::path::Path;

/// Print a coverage report to the given writer.
pub fn print_report<W: Write>(writer: W, report: &Report) -> io::Result<()> {
    let mut tw = TabWriter::new(writer);
    for package in report.packages() {
        write_package(&mut tw, package);
        tw.write_blank();
    }
    tw.flush()
}

/// Render a report into a string.
pub fn render_report(report: &Report) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = print_report(&mut buffer, report);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_package<W: Write>(tw: &mut TabWriter<W>, package: &Package) {
    for ranked in rank_functions(package) {
        tw.write_row(&format_row(&package.name, &ranked));
    }
}

/// Format a single unaligned report row.
pub fn format_row(package_name: &str, ranked: &RankedFunction<'_>) -> String {
    let function = ranked.function;
    format!(
        "{}/{}:{}\t {}\t {:.2}% ({}/{})",
        package_name,
        base_name(&function.file),
        function.line,
        function.name,
        ranked.coverage_percent(),
        ranked.statements_reached,
        ranked.total_statements()
    )
}

/// Last path component, `.` for an empty path.
fn base_name(file: &str) -> String {
    let trimmed = file.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return if file.is_empty() { ".".into() } else { "/".into() };
    }
    Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| trimmed.to_string())
}
