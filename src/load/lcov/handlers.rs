//! Handler functions for LCOV record types.
//!
//! Each handler takes the parser state and one record's data and updates the
//! state without doing any I/O, so the record dispatch in the parser stays a
//! thin loop and every record type can be tested on its own.
//!
//! - `handle_source_file` - SF: records
//! - `handle_function_name` - FN: records
//! - `handle_line_data` - DA: records
//! - `handle_end_of_record` - end_of_record markers
//! - `handle_incomplete_file` - input ending without end_of_record

use super::demangle::demangle_function_name;
use crate::model::{Function, Package, Statement};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Settings that shape how tracefile records become packages.
#[derive(Debug, Clone, Default)]
pub struct LcovOptions {
    /// Directory that package names are made relative to
    pub package_root: Option<PathBuf>,
    /// Demangle Rust symbol names
    pub demangle: bool,
}

/// Mutable state during LCOV parsing.
///
/// Accumulates the current file's functions and line counts until an
/// end_of_record marker turns them into model functions.
#[derive(Debug, Default)]
pub(crate) struct LcovParserState {
    pub options: LcovOptions,
    /// Finished packages, keyed by name
    pub packages: BTreeMap<String, Package>,
    pub current_file: Option<PathBuf>,
    /// (start line, name) in declaration order
    pub file_functions: Vec<(usize, String)>,
    /// (line, count) in record order
    pub file_lines: Vec<(usize, u64)>,
    pub file_count: usize,
}

impl LcovParserState {
    pub fn new(options: LcovOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Packages sorted by name.
    pub fn into_packages(self) -> Vec<Package> {
        self.packages.into_values().collect()
    }
}

/// Package name for a source path: its parent directory, relative to
/// `package_root` when the path lives under it. Empty names become `.`.
pub fn package_name_for(path: &Path, package_root: Option<&Path>) -> String {
    let relative = package_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let name = relative
        .parent()
        .map(|dir| dir.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();

    if name.is_empty() {
        ".".to_string()
    } else {
        name
    }
}

/// Build model functions from one file's declarations and line counts.
///
/// Each line belongs to the function with the greatest start line not past
/// it. Lines before the first function are dropped.
pub fn build_functions(
    file: &str,
    declared: &[(usize, String)],
    lines: &[(usize, u64)],
) -> Vec<Function> {
    let mut functions: Vec<Function> = declared
        .iter()
        .map(|(line, name)| Function::new(name.clone(), file, *line))
        .collect();
    functions.sort_by_key(|f| f.line);

    for &(line, count) in lines {
        let owner = functions.partition_point(|f| f.line <= line);
        if owner == 0 {
            continue;
        }
        functions[owner - 1]
            .statements
            .push(Statement::new(file, line, count));
    }

    functions
}

fn flush_current_file(state: &mut LcovParserState) {
    let Some(path) = state.current_file.take() else {
        return;
    };

    if !state.file_functions.is_empty() {
        let file = path.to_string_lossy().into_owned();
        let functions = build_functions(&file, &state.file_functions, &state.file_lines);
        let name = package_name_for(&path, state.options.package_root.as_deref());

        log::trace!("{}: {} functions in package {}", file, functions.len(), name);
        state
            .packages
            .entry(name.clone())
            .or_insert_with(|| Package::new(name))
            .functions
            .extend(functions);
    }

    state.file_functions.clear();
    state.file_lines.clear();
}

/// SF: save the previous file if it never saw end_of_record, start a new one.
pub(crate) fn handle_source_file(state: &mut LcovParserState, path: PathBuf) {
    flush_current_file(state);
    state.current_file = Some(path);
}

/// FN: register a function. Repeated names in one file keep the first entry.
pub(crate) fn handle_function_name(state: &mut LcovParserState, start_line: u32, name: String) {
    let name = if state.options.demangle {
        demangle_function_name(&name)
    } else {
        name
    };

    if state.file_functions.iter().any(|(_, existing)| *existing == name) {
        return;
    }
    state.file_functions.push((start_line as usize, name));
}

/// DA: record a statement's execution count.
pub(crate) fn handle_line_data(state: &mut LcovParserState, line: u32, count: u64) {
    state.file_lines.push((line as usize, count));
}

/// end_of_record: turn the current file into functions.
pub(crate) fn handle_end_of_record(state: &mut LcovParserState) {
    flush_current_file(state);
    state.file_count += 1;
}

/// Input ended without end_of_record; keep what was collected.
pub(crate) fn handle_incomplete_file(state: &mut LcovParserState) {
    if state.current_file.is_some() {
        log::debug!("Tracefile ended without end_of_record; flushing last file");
        flush_current_file(state);
    }
}
