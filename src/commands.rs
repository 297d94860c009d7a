//! The work behind the `doxnav` subcommands, writing to any [`Write`] sink.
use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::index::NavigationIndex;
use crate::validate::validate_with;
use doxnav_resource::FilesystemManifestProvider;
use log::{info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prints `file` (or the built-in index) as an outline or pretty JSON.
///
/// With `resolve`, deferred children are loaded from the configured base
/// directory. Without one, that is the script's own directory, or the
/// current directory for the built-in index.
pub fn show<W: Write>(
    file: Option<&Path>,
    json: bool,
    resolve: bool,
    config: &IndexConfig,
    out: &mut W,
) -> Result<(), IndexError> {
    let index = match file {
        Some(path) => read_index(path)?,
        None => crate::load().clone(),
    };
    let index = if resolve {
        let base = match file {
            Some(path) => config.base_dir_for(path),
            None => config.base_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        };
        let provider = FilesystemManifestProvider::new(base);
        index.resolve(&provider, &config.resolve_options())?
    } else {
        index
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&index)?)?;
    } else {
        write!(out, "{}", index.outline())?;
    }
    Ok(())
}

/// Parses and validates every file, reporting each one.
///
/// A file that cannot be read or parsed is reported and the run goes on.
/// Returns `false` if any file failed to load, or had violations while
/// `config.strict` is set.
pub fn check<W: Write>(
    files: &[PathBuf],
    config: &IndexConfig,
    out: &mut W,
) -> Result<bool, IndexError> {
    let mut clean = true;
    for path in files {
        let index = match read_index(path) {
            Ok(index) => index,
            Err(e) => {
                writeln!(out, "{}: error: {}", path.display(), e)?;
                clean = false;
                continue;
            }
        };
        let report = validate_with(&index, &config.validation);
        if report.is_ok() {
            info!("{}: {} entries, ok", path.display(), index.len());
            writeln!(out, "{}: ok", path.display())?;
        } else {
            writeln!(
                out,
                "{}: {} problem(s)",
                path.display(),
                report.violations().len()
            )?;
            write!(out, "{}", report)?;
            if config.strict {
                clean = false;
            } else {
                warn!("{}: violations ignored (strict = false)", path.display());
            }
        }
    }
    Ok(clean)
}

/// Writes the built-in index exactly as the generator does, without a
/// trailing newline.
pub fn emit<W: Write>(out: &mut W) -> Result<(), IndexError> {
    write!(out, "{}", crate::load().to_script())?;
    Ok(())
}

fn read_index(path: &Path) -> Result<NavigationIndex, IndexError> {
    info!("Reading navigation script {}", path.display());
    NavigationIndex::from_script(&fs::read_to_string(path)?)
}
