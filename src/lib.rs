//! Navigation indexes for generated API documentation.
//!
//! A documentation generator writes, next to every HTML page, a small script
//! listing the page's symbols as `[label, link, children]` triples. This
//! crate models that list as a [`NavigationIndex`], ships the index of the
//! `web3intf.h` page as built-in data, and can read, write, check, and
//! expand such scripts.
//!
//! ```
//! let index = doxnav::load();
//! assert_eq!(index.len(), 20);
//! assert_eq!(index.entries()[0].label, "TParam_eth_getTransactionCount");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod resolve;
pub mod validate;
pub mod web3intf;

pub use config::IndexConfig;
pub use error::IndexError;
pub use index::{NavigationIndex, Walk};
pub use resolve::ResolveOptions;
pub use validate::{ValidationOptions, ValidationReport, Violation, validate, validate_with};

pub use doxnav_navtree::{Manifest, NavTreeError};
pub use doxnav_resource::{
    FilesystemManifestProvider, InMemoryManifestProvider, ManifestProvider, ResourceError,
};
pub use doxnav_types::{Anchor, Children, EntryKind, NavEntry, NavTarget, PageRef, ScriptName};

/// The built-in `web3intf.h` navigation index, in declaration order.
pub fn load() -> &'static NavigationIndex {
    web3intf::load()
}
