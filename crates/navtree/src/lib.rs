//! Reader and writer for the navigation scripts a documentation generator
//! emits next to its HTML pages (`var name = [ [label, link, children], ... ];`).
//!
//! The reader accepts the generator's own output plus the small liberties a
//! hand-edited script tends to take: any whitespace, trailing commas, and a
//! missing final semicolon. The writer reproduces the generator's layout, so
//! a written script parses back to an equal [`Manifest`].

pub mod error;
pub mod manifest;
mod parser;
pub mod writer;

// --- Public API ---
pub use error::{Location, NavTreeError};
pub use manifest::Manifest;
pub use parser::{MAX_NESTING, parse_entries, parse_manifest};
pub use writer::{write_entries, write_manifest};
