// Shared builders for covrank integration tests
#![allow(dead_code)]

use covrank::{Function, Package, Statement};

/// A function whose first `reached` statements ran and the rest did not.
pub fn function(name: &str, file: &str, line: usize, reached: usize, total: usize) -> Function {
    let statements = (0..total).map(|i| Statement::new(file, line + i + 1, u64::from(i < reached)));
    Function::new(name, file, line).with_statements(statements)
}

pub fn package(name: &str, functions: impl IntoIterator<Item = Function>) -> Package {
    Package::new(name).with_functions(functions)
}

pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
