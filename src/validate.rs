//! Structural checks for navigation indexes.
use crate::error::IndexError;
use crate::index::NavigationIndex;
use doxnav_types::NavEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which rules [`validate_with`] applies. Label checks always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Inline children must point into their parent's page.
    pub same_page_children: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            same_page_children: true,
        }
    }
}

/// A single broken rule. `path` lists the labels of the enclosing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Violation {
    EmptyLabel { path: Vec<String>, position: usize },
    DuplicateLabel { path: Vec<String>, label: String },
    ForeignChildPage {
        path: Vec<String>,
        label: String,
        page: String,
        expected: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyLabel { path, position } => {
                write!(f, "{}: entry #{} has an empty label", scope(path), position)
            }
            Violation::DuplicateLabel { path, label } => {
                write!(f, "{}: label '{}' appears more than once", scope(path), label)
            }
            Violation::ForeignChildPage {
                path,
                label,
                page,
                expected,
            } => write!(
                f,
                "{}: child '{}' links to '{}', expected a spot on '{}'",
                scope(path),
                label,
                page,
                expected
            ),
        }
    }
}

fn scope(path: &[String]) -> String {
    if path.is_empty() {
        "<top level>".to_string()
    } else {
        path.join(" > ")
    }
}

/// Everything [`validate`] found, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_result(self) -> Result<(), IndexError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(IndexError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}

/// Checks `index` with the default rules.
pub fn validate(index: &NavigationIndex) -> ValidationReport {
    validate_with(index, &ValidationOptions::default())
}

pub fn validate_with(index: &NavigationIndex, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut path = Vec::new();
    check_list(index.entries(), None, options, &mut path, &mut report);
    report
}

fn check_list(
    entries: &[NavEntry],
    parent: Option<&NavEntry>,
    options: &ValidationOptions,
    path: &mut Vec<String>,
    report: &mut ValidationReport,
) {
    let mut seen = HashSet::new();
    for (position, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            report.violations.push(Violation::EmptyLabel {
                path: path.clone(),
                position,
            });
        } else if !seen.insert(entry.label.as_str()) {
            report.violations.push(Violation::DuplicateLabel {
                path: path.clone(),
                label: entry.label.clone(),
            });
        }

        if let Some(parent) = parent
            && options.same_page_children
            && entry.target.page() != parent.target.page()
        {
            report.violations.push(Violation::ForeignChildPage {
                path: path.clone(),
                label: entry.label.clone(),
                page: entry.target.page().to_string(),
                expected: parent.target.page().to_string(),
            });
        }

        if let Some(children) = entry.children.inline() {
            path.push(entry.label.clone());
            check_list(children, Some(entry), options, path, report);
            path.pop();
        }
    }
}
