//! Coverage report aggregation.
//!
//! A [`Report`] owns the packages discovered by a coverage producer and keeps
//! them sorted by name with no two packages sharing a name. Functions are
//! ranked only when the report is printed (see [`ranking`]), so adding a
//! package never reorders its functions.
//!
//! A report has no internal locking. `add_package`, `clear` and printing take
//! `&mut self`/`&self`, so concurrent callers must serialize access themselves
//! (for example behind a `Mutex`).
//!
//! # Example
//!
//! ```
//! use covrank::model::{Function, Package, Statement};
//! use covrank::report::{render_report, Report};
//!
//! let mut report = Report::new();
//! let f = Function::new("f2", "b.go", 5).with_statements([Statement::new("b.go", 6, 1)]);
//! report.add_package(Package::new("pkg").with_functions([f]))?;
//!
//! assert_eq!(render_report(&report), "pkg/b.go:5\t f2\t 100.00% (1/1)\n\n");
//! # Ok::<(), covrank::errors::ReportError>(())
//! ```

pub mod ranking;
pub mod render;
pub mod tabwriter;

pub use ranking::{compare_ascending, compare_descending, rank_functions, RankedFunction};
pub use render::{format_row, print_report, render_report};

use crate::errors::ReportError;
use crate::model::Package;

/// Packages keyed and sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    packages: Vec<Package>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package's coverage information to the report.
    ///
    /// The package is inserted at the first position whose package name is
    /// not less than `package.name`, keeping the collection sorted. A package
    /// whose name is already present is rejected with
    /// [`ReportError::DuplicatePackage`] and the report is left unchanged.
    pub fn add_package(&mut self, package: Package) -> Result<(), ReportError> {
        let index = self
            .packages
            .partition_point(|existing| existing.name < package.name);

        if self
            .packages
            .get(index)
            .is_some_and(|existing| existing.name == package.name)
        {
            log::debug!("Rejecting duplicate package {}", package.name);
            return Err(ReportError::duplicate_package(package.name));
        }

        log::trace!(
            "Adding package {} ({} functions) at position {}",
            package.name,
            package.functions.len(),
            index
        );
        self.packages.insert(index, package);
        Ok(())
    }

    /// Drop every package from the report.
    pub fn clear(&mut self) {
        self.packages.clear();
    }

    /// Packages in ascending name order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.packages[i])
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
