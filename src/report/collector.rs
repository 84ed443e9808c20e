//! Accumulates path-tagged violations for one validation pass.

use std::collections::BTreeMap;

use super::path::FieldPath;
use super::violation::{Violation, ViolationKind};

/// Violations in the order they were recorded.
///
/// Grows during a pass and is read-only once the pass returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollector {
    violations: Vec<Violation>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation at `path`.
    pub fn record(&mut self, path: FieldPath, kind: ViolationKind) {
        self.violations.push(Violation::new(path, kind));
    }

    /// Append every violation of `sub`, with `prefix` in front of its path.
    pub fn merge(&mut self, sub: ErrorCollector, prefix: &FieldPath) {
        self.violations.extend(
            sub.violations
                .into_iter()
                .map(|v| Violation::new(v.path.prefixed(prefix), v.kind)),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations recorded exactly at `path`.
    pub fn at<'a>(&'a self, path: &'a FieldPath) -> impl Iterator<Item = &'a ViolationKind> + 'a {
        self.violations
            .iter()
            .filter(move |v| &v.path == path)
            .map(|v| &v.kind)
    }

    /// Messages grouped by rendered path.
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in &self.violations {
            grouped
                .entry(violation.path.to_string())
                .or_default()
                .push(violation.message());
        }
        grouped
    }

    /// One `"<path> <message>"` line per violation, in record order.
    pub fn full_messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ErrorCollector {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
