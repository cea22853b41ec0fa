//! Coverage model records.
//!
//! These are the records a coverage producer hands to the report: packages
//! own functions, functions own statements. The report never mutates them
//! once they have been added.
//!
//! # Types
//!
//! - [`Statement`] - A source position with its execution count
//! - [`Function`] - A named function and its statements in source order
//! - [`Package`] - A named group of functions

use serde::{Deserialize, Serialize};

/// A single executable statement and how often it ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// File the statement lives in
    #[serde(default)]
    pub file: String,
    /// Line number of the statement
    pub line: usize,
    /// Execution count; anything above zero counts as reached
    pub reached: u64,
}

impl Statement {
    pub fn new(file: impl Into<String>, line: usize, reached: u64) -> Self {
        Self {
            file: file.into(),
            line,
            reached,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.reached > 0
    }
}

/// A function with its statements in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Defining file, as reported by the producer (may include directories)
    pub file: String,
    /// Line where the function starts
    pub line: usize,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>, file: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            statements: Vec::new(),
        }
    }

    /// Builder-style helper that appends statements.
    pub fn with_statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.statements.extend(statements);
        self
    }

    pub fn total_statements(&self) -> usize {
        self.statements.len()
    }

    pub fn statements_reached(&self) -> usize {
        self.statements.iter().filter(|s| s.is_reached()).count()
    }
}

/// A named group of functions. Names are unique within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    pub fn with_functions(mut self, functions: impl IntoIterator<Item = Function>) -> Self {
        self.functions.extend(functions);
        self
    }
}

/// Top-level shape of a JSON coverage document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDocument {
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_reached_counts_positive_only() {
        let func = Function::new("f", "a.go", 1).with_statements([
            Statement::new("a.go", 2, 0),
            Statement::new("a.go", 3, 1),
            Statement::new("a.go", 4, 17),
        ]);

        assert_eq!(func.total_statements(), 3);
        assert_eq!(func.statements_reached(), 2);
    }

    #[test]
    fn test_statement_order_is_preserved() {
        let func = Function::new("f", "a.go", 1).with_statements([
            Statement::new("a.go", 9, 0),
            Statement::new("a.go", 2, 0),
        ]);

        let lines: Vec<usize> = func.statements.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![9, 2]);
    }

    #[test]
    fn test_document_defaults_missing_arrays() {
        let doc: CoverageDocument =
            serde_json::from_str(r#"{"packages":[{"name":"p"}]}"#).unwrap();
        assert_eq!(doc.packages.len(), 1);
        assert!(doc.packages[0].functions.is_empty());

        let empty: CoverageDocument = serde_json::from_str("{}").unwrap();
        assert!(empty.packages.is_empty());
    }
}
