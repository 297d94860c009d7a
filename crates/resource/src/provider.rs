//! The `ManifestProvider` trait and its in-memory implementation.
//!
//! Navigation indexes refer to further scripts by name (a struct page's
//! member listing lives in `struct_x.js`). Providers turn such a name into
//! the script's text, whether it sits on disk or was registered up front.

use doxnav_types::ScriptName;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Navigation script not found: {0}")]
    NotFound(String),

    #[error("Failed to load navigation script '{script}': {message}")]
    LoadFailed { script: String, message: String },

    #[error("Navigation script '{0}' is not valid UTF-8")]
    InvalidEncoding(String),
}

/// Shared script text.
pub type ScriptText = Arc<str>;

/// Loads navigation scripts by name.
///
/// # Implementations
///
/// - `FilesystemManifestProvider`: reads `<name>.js` below a base directory
/// - `InMemoryManifestProvider`: serves scripts registered beforehand
pub trait ManifestProvider: Send + Sync + Debug {
    /// Load the text of the named script.
    fn load(&self, script: &ScriptName) -> Result<ScriptText, ResourceError>;

    /// Check if the named script can be loaded.
    fn exists(&self, script: &ScriptName) -> bool;

    /// Human-readable provider name for log lines.
    fn name(&self) -> &'static str;
}

/// A provider backed by a map of registered scripts.
#[derive(Debug, Default)]
pub struct InMemoryManifestProvider {
    scripts: RwLock<HashMap<ScriptName, ScriptText>>,
}

impl InMemoryManifestProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a script.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        script: impl Into<ScriptName>,
        text: impl Into<ScriptText>,
    ) -> Result<(), ResourceError> {
        let script = script.into();
        let mut scripts = self.scripts.write().map_err(|_| ResourceError::LoadFailed {
            script: script.to_string(),
            message: "script store lock poisoned".to_string(),
        })?;
        scripts.insert(script, text.into());
        Ok(())
    }

    /// Remove a script. Returns `None` if absent or the lock is poisoned.
    pub fn remove(&self, script: &ScriptName) -> Option<ScriptText> {
        self.scripts.write().ok()?.remove(script)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.scripts.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ManifestProvider for InMemoryManifestProvider {
    fn load(&self, script: &ScriptName) -> Result<ScriptText, ResourceError> {
        let scripts = self.scripts.read().map_err(|_| ResourceError::LoadFailed {
            script: script.to_string(),
            message: "script store lock poisoned".to_string(),
        })?;
        scripts
            .get(script)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(script.to_string()))
    }

    fn exists(&self, script: &ScriptName) -> bool {
        self.scripts
            .read()
            .map(|s| s.contains_key(script))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryManifestProvider"
    }
}
