//! The navigation index: an ordered, read-only list of entries.
use crate::error::IndexError;
use doxnav_navtree::{Manifest, parse_manifest, write_manifest};
use doxnav_types::{Children, NavEntry};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The ordered entry list of one documentation page.
///
/// Built once, either from static data or by parsing a generated script,
/// and never mutated afterwards. Operations that change the shape of the
/// tree (such as [`NavigationIndex::resolve`]) return a new index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIndex {
    name: String,
    entries: Vec<NavEntry>,
}

impl NavigationIndex {
    pub fn new(name: impl Into<String>, entries: Vec<NavEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Parses a generated `var name = [ ... ];` script.
    pub fn from_script(text: &str) -> Result<Self, IndexError> {
        Ok(parse_manifest(text)?.into())
    }

    /// Serialises the index back to the generator's script format.
    pub fn to_script(&self) -> String {
        write_manifest(&self.to_manifest())
    }

    pub fn to_manifest(&self) -> Manifest {
        Manifest::new(self.name.clone(), self.entries.clone())
    }

    /// The script variable name, e.g. `web3intf_8h`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<NavEntry> {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entry with the given label.
    pub fn get(&self, label: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Declaration position of a top-level label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }

    /// Depth-first walk over all entries and their inline children.
    /// Top-level entries have depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self.entries.iter())],
        }
    }

    /// Indented plain-text outline, one entry per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (depth, entry) in self.walk() {
            let _ = write!(out, "{}{} -> {}", "  ".repeat(depth), entry.label, entry.target);
            if let Children::Deferred(script) = &entry.children {
                let _ = write!(out, " [{}]", script.file_name());
            }
            out.push('\n');
        }
        out
    }
}

impl From<Manifest> for NavigationIndex {
    fn from(manifest: Manifest) -> Self {
        Self::new(manifest.name, manifest.entries)
    }
}

impl<'a> IntoIterator for &'a NavigationIndex {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Iterator returned by [`NavigationIndex::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, std::slice::Iter<'a, NavEntry>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NavEntry);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(entry) => {
                    if let Some(children) = entry.children.inline() {
                        self.stack.push((depth + 1, children.iter()));
                    }
                    return Some((depth, entry));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
