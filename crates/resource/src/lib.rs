//! Manifest providers for doxnav.
//!
//! ## Available Providers
//!
//! - [`FilesystemManifestProvider`]: reads `<name>.js` from a directory
//! - [`InMemoryManifestProvider`]: pre-populated in-memory storage

mod filesystem;
mod provider;

pub use filesystem::FilesystemManifestProvider;
pub use provider::{InMemoryManifestProvider, ManifestProvider, ResourceError, ScriptText};
