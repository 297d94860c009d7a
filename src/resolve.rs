//! Inlining of deferred children.
//!
//! A compound entry such as a struct page names a second script holding its
//! member listing. Resolution loads those scripts through a
//! [`ManifestProvider`] and splices their entries in place, producing an
//! index with no deferred references left (unless missing ones are skipped).
use crate::error::IndexError;
use crate::index::NavigationIndex;
use doxnav_navtree::parse_manifest;
use doxnav_resource::{ManifestProvider, ResourceError};
use doxnav_types::{Children, NavEntry, ScriptName};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveOptions {
    /// Maximum number of nested scripts on one path.
    pub max_depth: usize,
    /// Leave references to missing scripts deferred instead of failing.
    pub skip_missing: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            skip_missing: false,
        }
    }
}

impl NavigationIndex {
    /// Returns a copy of this index with every deferred child listing inlined.
    pub fn resolve(
        &self,
        provider: &dyn ManifestProvider,
        options: &ResolveOptions,
    ) -> Result<NavigationIndex, IndexError> {
        debug!(
            "Resolving '{}' through {} (max depth {})",
            self.name(),
            provider.name(),
            options.max_depth
        );
        let mut resolver = Resolver {
            provider,
            options,
            chain: vec![ScriptName::from(self.name())],
        };
        let entries = resolver.resolve_list(self.entries())?;
        Ok(NavigationIndex::new(self.name(), entries))
    }
}

struct Resolver<'a> {
    provider: &'a dyn ManifestProvider,
    options: &'a ResolveOptions,
    /// Scripts currently being expanded, outermost first.
    chain: Vec<ScriptName>,
}

impl Resolver<'_> {
    fn resolve_list(&mut self, entries: &[NavEntry]) -> Result<Vec<NavEntry>, IndexError> {
        entries.iter().map(|e| self.resolve_entry(e)).collect()
    }

    fn resolve_entry(&mut self, entry: &NavEntry) -> Result<NavEntry, IndexError> {
        let children = match &entry.children {
            Children::None => Children::None,
            Children::Inline(children) => Children::Inline(self.resolve_list(children)?),
            Children::Deferred(script) => match self.expand(script)? {
                Some(children) => Children::Inline(children),
                None => Children::Deferred(script.clone()),
            },
        };
        Ok(NavEntry {
            label: entry.label.clone(),
            target: entry.target.clone(),
            children,
        })
    }

    /// Loads and resolves one script. `None` means it was missing and skipped.
    fn expand(&mut self, script: &ScriptName) -> Result<Option<Vec<NavEntry>>, IndexError> {
        if self.chain.contains(script) {
            let chain = self
                .chain
                .iter()
                .map(ScriptName::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(IndexError::Cycle {
                script: script.to_string(),
                chain,
            });
        }
        if self.chain.len() > self.options.max_depth {
            return Err(IndexError::TooDeep {
                script: script.to_string(),
                max_depth: self.options.max_depth,
            });
        }

        let text = match self.provider.load(script) {
            Ok(text) => text,
            Err(ResourceError::NotFound(_)) if self.options.skip_missing => {
                warn!("Navigation script '{}' not found, leaving it deferred", script);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let manifest = parse_manifest(&text)?;
        if manifest.name != script.as_str() {
            debug!(
                "Script '{}' assigns variable '{}'",
                script, manifest.name
            );
        }

        self.chain.push(script.clone());
        let resolved = self.resolve_list(&manifest.entries);
        self.chain.pop();
        resolved.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxnav_resource::InMemoryManifestProvider;

    fn root() -> NavigationIndex {
        NavigationIndex::new(
            "top",
            vec![
                NavEntry::new(
                    "S",
                    "struct_s.html",
                    Children::Deferred(ScriptName::new("struct_s")),
                ),
                NavEntry::leaf("f", "top.html#a1"),
            ],
        )
    }

    #[test]
    fn test_resolve_inlines_children() {
        let provider = InMemoryManifestProvider::new();
        provider
            .add(
                "struct_s",
                "var struct_s =\n[\n    [ \"x\", \"struct_s.html#a0\", null ]\n];",
            )
            .unwrap();

        let resolved = root().resolve(&provider, &ResolveOptions::default()).unwrap();
        let children = resolved.entries()[0].children.inline().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, "x");
        assert_eq!(resolved.entries()[1], root().entries()[1]);
    }

    #[test]
    fn test_missing_script_fails_by_default() {
        let provider = InMemoryManifestProvider::new();
        let err = root()
            .resolve(&provider, &ResolveOptions::default())
            .unwrap_err();
        assert!(matches!(err, IndexError::Resource(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_missing_script_can_be_skipped() {
        let provider = InMemoryManifestProvider::new();
        let options = ResolveOptions {
            skip_missing: true,
            ..Default::default()
        };
        let resolved = root().resolve(&provider, &options).unwrap();
        assert_eq!(resolved, root());
    }

    #[test]
    fn test_cycle_is_detected() {
        let provider = InMemoryManifestProvider::new();
        provider
            .add("struct_s", "var struct_s = [ [ \"back\", \"top.html\", \"top\" ] ];")
            .unwrap();

        let err = root()
            .resolve(&provider, &ResolveOptions::default())
            .unwrap_err();
        match err {
            IndexError::Cycle { script, chain } => {
                assert_eq!(script, "top");
                assert_eq!(chain, "top -> struct_s");
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_limit() {
        let provider = InMemoryManifestProvider::new();
        provider
            .add("struct_s", "var struct_s = [ [ \"n\", \"n.html\", \"level2\" ] ];")
            .unwrap();
        provider
            .add("level2", "var level2 = [ [ \"m\", \"m.html#a\", null ] ];")
            .unwrap();

        let options = ResolveOptions {
            max_depth: 1,
            skip_missing: false,
        };
        let err = root().resolve(&provider, &options).unwrap_err();
        assert!(matches!(err, IndexError::TooDeep { max_depth: 1, .. }));

        let options = ResolveOptions {
            max_depth: 2,
            skip_missing: false,
        };
        assert!(root().resolve(&provider, &options).is_ok());
    }
}
