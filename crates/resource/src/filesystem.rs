//! Filesystem-based manifest provider.
//!
//! Scripts are read from `<base>/<name>.js`. Names that would resolve
//! outside the base directory are refused.

use crate::provider::{ManifestProvider, ResourceError, ScriptText};
use doxnav_types::ScriptName;
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Reads navigation scripts from a documentation output directory,
/// typically the generator's `html/` folder.
#[derive(Debug)]
pub struct FilesystemManifestProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemManifestProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the directory doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a script name to a file below the base directory.
    ///
    /// Returns `None` if the name is absolute or escapes the base.
    fn resolve_path_safe(&self, script: &ScriptName) -> Option<PathBuf> {
        let relative = PathBuf::from(script.file_name());
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(&relative);
        if let (Ok(canonical), Some(base)) = (full_path.canonicalize(), &self.canonical_base) {
            return canonical.starts_with(base).then_some(canonical);
        }
        Some(full_path)
    }
}

impl ManifestProvider for FilesystemManifestProvider {
    fn load(&self, script: &ScriptName) -> Result<ScriptText, ResourceError> {
        let full_path = self
            .resolve_path_safe(script)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside base directory)", script)))?;
        debug!("Loading navigation script {}", full_path.display());

        let bytes = std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(script.to_string())
            } else {
                ResourceError::LoadFailed {
                    script: script.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        String::from_utf8(bytes)
            .map(ScriptText::from)
            .map_err(|_| ResourceError::InvalidEncoding(script.to_string()))
    }

    fn exists(&self, script: &ScriptName) -> bool {
        self.resolve_path_safe(script)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemManifestProvider"
    }
}
