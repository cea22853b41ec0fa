//! Per-package function ranking.
//!
//! Functions are ordered by statement coverage ratio, best covered first.
//! When two functions have the same ratio, the one with more statements is
//! listed first. The ordering is expressed as a single ascending comparator
//! ([`compare_ascending`]) that is applied with its operands swapped.

use crate::model::{Function, Package};
use std::cmp::Ordering;

/// A function paired with the number of its statements that were reached.
///
/// Only exists while a report is being printed; it borrows the function and
/// never changes it.
#[derive(Debug, Clone, Copy)]
pub struct RankedFunction<'a> {
    pub function: &'a Function,
    pub statements_reached: usize,
}

impl<'a> RankedFunction<'a> {
    pub fn new(function: &'a Function) -> Self {
        Self {
            function,
            statements_reached: function.statements_reached(),
        }
    }

    pub fn total_statements(&self) -> usize {
        self.function.total_statements()
    }

    /// Reached over total, or 0.0 for a function without statements.
    pub fn coverage_ratio(&self) -> f64 {
        coverage_ratio(self.statements_reached, self.total_statements())
    }

    /// Coverage ratio expressed as a percentage.
    pub fn coverage_percent(&self) -> f64 {
        self.coverage_ratio() * 100.0
    }
}

pub fn coverage_ratio(reached: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        reached as f64 / total as f64
    }
}

/// Ascending order: lower ratio first, then fewer total statements first.
pub fn compare_ascending(a: &RankedFunction<'_>, b: &RankedFunction<'_>) -> Ordering {
    // Ratios are always finite, so partial_cmp never fails here
    a.coverage_ratio()
        .partial_cmp(&b.coverage_ratio())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.total_statements().cmp(&b.total_statements()))
}

/// Report order: the reverse of [`compare_ascending`].
pub fn compare_descending(a: &RankedFunction<'_>, b: &RankedFunction<'_>) -> Ordering {
    compare_ascending(b, a)
}

/// Rank a package's functions for printing.
///
/// The sort is stable, so functions that tie on both ratio and statement
/// count keep their discovery order.
pub fn rank_functions(package: &Package) -> Vec<RankedFunction<'_>> {
    let mut ranked: Vec<RankedFunction<'_>> =
        package.functions.iter().map(RankedFunction::new).collect();
    ranked.sort_by(compare_descending);
    ranked
}
