// src/error.rs
use crate::validate::ValidationReport;
use doxnav_navtree::NavTreeError;
use doxnav_resource::ResourceError;
use thiserror::Error;

/// Errors raised while reading, resolving, or checking navigation indexes.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Navigation script is malformed: {0}")]
    Manifest(#[from] NavTreeError),

    #[error("Could not load navigation script: {0}")]
    Resource(#[from] ResourceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation index failed validation:\n{0}")]
    Invalid(ValidationReport),

    #[error("Script '{script}' includes itself (via {chain})")]
    Cycle { script: String, chain: String },

    #[error("Script '{script}' is nested deeper than the limit of {max_depth}")]
    TooDeep { script: String, max_depth: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}
