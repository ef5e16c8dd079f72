//! Per-list verdicts
//!
//! A list counts as active when a strict majority of its probes were
//! suppressed. The returned names are sorted; their order carries no meaning.

use std::fmt;

use crate::catalog::{Catalog, FilterList};
use crate::probe::ProbeResult;

/// Whether `blocked` out of `total` selectors is a strict majority.
pub fn is_majority(blocked: usize, total: usize) -> bool {
    blocked * 2 > total
}

/// Suppressed selectors of one list.
pub fn blocked_count(list: &FilterList, result: &ProbeResult) -> usize {
    list.selectors()
        .iter()
        .filter(|selector| result.is_blocked(selector.text()))
        .count()
}

/// Names of the active lists, sorted alphabetically.
pub fn active_lists(catalog: &Catalog, result: &ProbeResult) -> Vec<String> {
    let mut active: Vec<String> = catalog
        .lists()
        .iter()
        .filter(|list| is_majority(blocked_count(list, result), list.len()))
        .map(|list| list.name().to_string())
        .collect();
    active.sort();
    active
}

/// Raw per-selector measurements grouped by list.
pub struct DebugReport<'a> {
    catalog: &'a Catalog,
    result: &'a ProbeResult,
}

impl<'a> DebugReport<'a> {
    pub fn new(catalog: &'a Catalog, result: &'a ProbeResult) -> Self {
        Self { catalog, result }
    }
}

impl fmt::Display for DebugReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DOM blockers debug:\n```")?;
        for list in self.catalog.lists() {
            write!(f, "\n{}:", list.name())?;
            for selector in list.selectors() {
                let mark = if self.result.is_blocked(selector.text()) { "🚫" } else { "➡️" };
                write!(f, "\n  {} {}", selector.text(), mark)?;
            }
        }
        write!(f, "\n```")
    }
}
