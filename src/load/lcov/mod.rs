//! LCOV tracefile loading.
//!
//! The reader walks the tracefile record by record and dispatches each one
//! to a handler in [`handlers`]. Source files become functions grouped into
//! packages by directory:
//!
//! ```text
//! SF:src/net/conn.rs          -> package "src/net"
//! FN:10,connect               -> function "connect" starting at line 10
//! DA:11,3                     -> statement at line 11, reached 3 times
//! end_of_record
//! ```

pub mod demangle;
pub mod handlers;

pub use handlers::{build_functions, package_name_for, LcovOptions};

use crate::errors::LoadError;
use crate::model::Package;
use handlers::{
    handle_end_of_record, handle_function_name, handle_incomplete_file, handle_line_data,
    handle_source_file, LcovParserState,
};
use lcov::{Reader, Record};
use std::io::BufRead;
use std::path::Path;

/// Parse an LCOV tracefile into packages sorted by name.
pub fn parse_lcov_file(path: &Path, options: &LcovOptions) -> Result<Vec<Package>, LoadError> {
    let reader = Reader::open_file(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lcov_records(reader, path, options)
}

/// Parse LCOV text that is already in memory.
pub fn parse_lcov_str(input: &str, options: &LcovOptions) -> Result<Vec<Package>, LoadError> {
    parse_lcov_records(Reader::new(input.as_bytes()), Path::new("<memory>"), options)
}

fn parse_lcov_records<B: BufRead>(
    reader: Reader<B>,
    path: &Path,
    options: &LcovOptions,
) -> Result<Vec<Package>, LoadError> {
    let mut state = LcovParserState::new(options.clone());

    for record in reader {
        let record = record.map_err(|e| LoadError::Lcov {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match record {
            Record::SourceFile { path } => handle_source_file(&mut state, path),
            Record::FunctionName { start_line, name, .. } => {
                handle_function_name(&mut state, start_line, name)
            }
            Record::LineData { line, count, .. } => handle_line_data(&mut state, line, count),
            Record::EndOfRecord => handle_end_of_record(&mut state),
            _ => {} // Ignore other record types
        }
    }

    handle_incomplete_file(&mut state);

    log::debug!(
        "Parsed {} source files from {}",
        state.file_count,
        path.display()
    );
    Ok(state.into_packages())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TRACEFILE: &str = "TN:
SF:src/net/conn.rs
FN:10,connect
FN:20,close
FNDA:1,connect
FNDA:0,close
DA:11,3
DA:12,0
DA:21,0
LF:3
LH:1
end_of_record
SF:src/net/addr.rs
FN:1,parse
DA:2,1
end_of_record
";

    fn options() -> LcovOptions {
        LcovOptions {
            package_root: None,
            demangle: true,
        }
    }

    #[test]
    fn test_parse_lcov_str() {
        let packages = parse_lcov_str(TRACEFILE, &options()).unwrap();

        assert_eq!(packages.len(), 1);
        let net = &packages[0];
        assert_eq!(net.name, "src/net");

        let summary: Vec<(&str, usize, usize)> = net
            .functions
            .iter()
            .map(|f| (f.name.as_str(), f.statements_reached(), f.total_statements()))
            .collect();
        assert_eq!(
            summary,
            vec![("connect", 1, 2), ("close", 0, 1), ("parse", 1, 1)]
        );
        assert_eq!(net.functions[0].file, "src/net/conn.rs");
    }

    #[test]
    fn test_parse_lcov_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TRACEFILE.as_bytes()).unwrap();

        let options = LcovOptions {
            package_root: Some("src".into()),
            demangle: true,
        };
        let packages = parse_lcov_file(file.path(), &options).unwrap();
        assert_eq!(packages[0].name, "net");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_lcov_file(Path::new("/nonexistent/coverage.info"), &options()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_malformed_record_is_lcov_error() {
        let err = parse_lcov_str("SF:a.rs\nDA:not-a-number,1\n", &options()).unwrap_err();
        assert!(matches!(err, LoadError::Lcov { .. }));
    }

    #[test]
    fn test_demangling_can_be_disabled() {
        let input = "SF:a/b.rs\nFN:1,_ZN4testE\nDA:2,1\nend_of_record\n";

        let demangled = parse_lcov_str(input, &options()).unwrap();
        assert_eq!(demangled[0].functions[0].name, "test");

        let raw = parse_lcov_str(
            input,
            &LcovOptions {
                package_root: None,
                demangle: false,
            },
        )
        .unwrap();
        assert_eq!(raw[0].functions[0].name, "_ZN4testE");
    }
}
