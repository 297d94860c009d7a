use crate::ids::{Anchor, PageRef, ScriptName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A link from a navigation entry into the generated documentation.
///
/// The generator writes targets as `page.html` or `page.html#anchor`. The
/// string form survives a parse/display cycle unchanged, including a bare
/// trailing `#`, which is kept as an empty anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NavTarget {
    page: PageRef,
    anchor: Option<Anchor>,
}

impl NavTarget {
    pub fn new(page: impl Into<PageRef>, anchor: Option<Anchor>) -> Self {
        Self {
            page: page.into(),
            anchor,
        }
    }

    /// Splits a link at its first `#`.
    pub fn parse(link: &str) -> Self {
        match link.split_once('#') {
            Some((page, frag)) => Self::new(page, Some(Anchor::from(frag))),
            None => Self::new(link, None),
        }
    }

    pub fn page(&self) -> &PageRef {
        &self.page
    }

    /// The fragment, if non-empty.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref().filter(|a| !a.is_empty())
    }

    /// True when the target is a whole page rather than a spot inside one.
    /// `page.html#` counts as a whole page.
    pub fn is_page(&self) -> bool {
        self.anchor().is_none()
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.page, anchor),
            None => write!(f, "{}", self.page),
        }
    }
}

impl From<String> for NavTarget {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for NavTarget {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<NavTarget> for String {
    fn from(t: NavTarget) -> Self {
        t.to_string()
    }
}

/// The third slot of a navigation triple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    /// Children written in place.
    Inline(Vec<NavEntry>),
    /// Children kept in a separate index script, loaded on demand.
    Deferred(ScriptName),
    /// `null`: the entry has no nested listing.
    #[default]
    None,
}

impl Children {
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }

    pub fn inline(&self) -> Option<&[NavEntry]> {
        match self {
            Children::Inline(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn deferred(&self) -> Option<&ScriptName> {
        match self {
            Children::Deferred(script) => Some(script),
            _ => None,
        }
    }
}

/// What kind of documentation location an entry points at, judged from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    /// A page of its own with a member listing (struct, class, union).
    Compound,
    /// An anchored spot on a page (function, typedef, variable).
    Member,
    /// A bare page without nested listing.
    Page,
}

/// One row of a generated navigation index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display name of the documented symbol.
    pub label: String,
    /// Where the symbol is documented.
    pub target: NavTarget,
    /// Nested listing, if any.
    pub children: Children,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, target: impl Into<NavTarget>, children: Children) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            children,
        }
    }

    /// Shorthand for an entry with `null` children.
    pub fn leaf(label: impl Into<String>, target: impl Into<NavTarget>) -> Self {
        Self::new(label, target, Children::None)
    }

    pub fn kind(&self) -> EntryKind {
        if !self.target.is_page() {
            EntryKind::Member
        } else if self.children.is_none() {
            EntryKind::Page
        } else {
            EntryKind::Compound
        }
    }
}
