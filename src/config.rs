//! Settings for loading and checking navigation indexes.
//!
//! Read from a JSON file (`--config`) or left at their defaults:
//!
//! ```json
//! {
//!   "baseDir": "docs/html",
//!   "maxDepth": 8,
//!   "skipMissing": false,
//!   "strict": true,
//!   "validation": { "samePageChildren": true }
//! }
//! ```
use crate::error::IndexError;
use crate::resolve::ResolveOptions;
use crate::validate::ValidationOptions;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory holding the generated scripts. When unset, the directory of
    /// the script being read is used.
    pub base_dir: Option<PathBuf>,
    pub max_depth: usize,
    pub skip_missing: bool,
    /// Treat validation violations as failures.
    pub strict: bool,
    pub validation: ValidationOptions,
}

impl Default for IndexConfig {
    fn default() -> Self {
        let resolve = ResolveOptions::default();
        Self {
            base_dir: None,
            max_depth: resolve.max_depth,
            skip_missing: resolve.skip_missing,
            strict: true,
            validation: ValidationOptions::default(),
        }
    }
}

impl IndexConfig {
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_depth == 0 {
            return Err(IndexError::Config("maxDepth must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            max_depth: self.max_depth,
            skip_missing: self.skip_missing,
        }
    }

    /// Base directory for deferred scripts of the script at `script_path`.
    pub fn base_dir_for(&self, script_path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.clone(),
            None => script_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
