//! Emits navigation scripts in the layout the documentation generator uses.
use crate::manifest::Manifest;
use doxnav_types::{Children, NavEntry};
use std::fmt::Write;

const TOP_INDENT: usize = 4;
const NESTED_STEP: usize = 2;

/// Writes `manifest` as a `var name = [ ... ];` script.
///
/// Top-level triples sit on their own lines indented by four spaces; inline
/// children open on the parent's line and close with `] ]`.
pub fn write_manifest(manifest: &Manifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "var {} =", manifest.name);
    out.push_str("[\n");
    write_list(&mut out, &manifest.entries, TOP_INDENT);
    out.push_str("\n];");
    out
}

/// Writes a bare bracketed list, the form `parse_entries` reads back.
pub fn write_entries(entries: &[NavEntry]) -> String {
    let mut out = String::from("[\n");
    write_list(&mut out, entries, TOP_INDENT);
    out.push_str("\n]");
    out
}

fn write_list(out: &mut String, entries: &[NavEntry], indent: usize) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        write_entry(out, entry, indent);
    }
}

fn write_entry(out: &mut String, entry: &NavEntry, indent: usize) {
    let pad = " ".repeat(indent);
    let _ = write!(
        out,
        "{}[ {}, {}, ",
        pad,
        quote(&entry.label),
        quote(&entry.target.to_string())
    );
    match &entry.children {
        Children::None => out.push_str("null ]"),
        Children::Deferred(script) => {
            let _ = write!(out, "{} ]", quote(script.as_str()));
        }
        Children::Inline(children) if children.is_empty() => out.push_str("[ ] ]"),
        Children::Inline(children) => {
            out.push_str("[\n");
            write_list(out, children, indent + NESTED_STEP);
            let _ = write!(out, "\n{}] ]", pad);
        }
    }
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
