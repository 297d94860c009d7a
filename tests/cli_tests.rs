mod common;

use common::fixtures::WEB3INTF_8H_JS;
use common::{TestResult, init_logging};
use doxnav::{IndexConfig, commands};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const DUPLICATE_LABELS: &str = r#"var dup =
[
    [ "web3_init", "web3intf_8h.html#a1", null ],
    [ "web3_init", "web3intf_8h.html#a2", null ]
];"#;

const CALL_MEMBERS: &str = r#"var struct_t_param__eth__call =
[
    [ "data", "struct_t_param__eth__call.html#a01", null ],
    [ "to", "struct_t_param__eth__call.html#a04", null ]
];"#;

fn lenient() -> IndexConfig {
    IndexConfig {
        skip_missing: true,
        ..Default::default()
    }
}

#[test]
fn test_check_strict_fails_on_violations() -> TestResult {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("dup.js");
    fs::write(&path, DUPLICATE_LABELS)?;

    let mut out = Vec::new();
    let clean = commands::check(&[path], &IndexConfig::default(), &mut out)?;
    assert!(!clean);

    let text = String::from_utf8(out)?;
    assert!(text.contains("dup.js: 1 problem(s)"));
    Ok(())
}

#[test]
fn test_check_non_strict_reports_but_passes() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("dup.js");
    fs::write(&path, DUPLICATE_LABELS)?;
    let config = IndexConfig {
        strict: false,
        ..Default::default()
    };

    let mut out = Vec::new();
    let clean = commands::check(&[path], &config, &mut out)?;
    assert!(clean);
    assert!(String::from_utf8(out)?.contains("1 problem(s)"));
    Ok(())
}

#[test]
fn test_check_continues_past_unreadable_files() -> TestResult {
    let dir = tempdir()?;
    let broken = dir.path().join("broken.js");
    let good = dir.path().join("web3intf_8h.js");
    let missing = dir.path().join("missing.js");
    fs::write(&broken, "var broken = [ [ \"x\", ")?;
    fs::write(&good, WEB3INTF_8H_JS)?;

    let files: Vec<PathBuf> = vec![broken, missing, good];
    let mut out = Vec::new();
    let clean = commands::check(&files, &IndexConfig::default(), &mut out)?;
    assert!(!clean);

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("broken.js: error:"));
    assert!(lines[1].contains("missing.js: error:"));
    assert!(lines[2].ends_with("web3intf_8h.js: ok"));
    Ok(())
}

#[test]
fn test_check_non_strict_still_fails_on_unreadable_files() -> TestResult {
    let dir = tempdir()?;
    let config = IndexConfig {
        strict: false,
        ..Default::default()
    };

    let mut out = Vec::new();
    let clean = commands::check(&[dir.path().join("missing.js")], &config, &mut out)?;
    assert!(!clean);
    Ok(())
}

#[test]
fn test_show_resolve_uses_script_directory() -> TestResult {
    let dir = tempdir()?;
    let script = dir.path().join("web3intf_8h.js");
    fs::write(&script, WEB3INTF_8H_JS)?;
    fs::write(dir.path().join("struct_t_param__eth__call.js"), CALL_MEMBERS)?;

    let mut out = Vec::new();
    commands::show(Some(&script), false, true, &lenient(), &mut out)?;

    let text = String::from_utf8(out)?;
    assert!(text.contains("TParam_eth_call -> struct_t_param__eth__call.html\n"));
    assert!(text.contains("\n  data -> struct_t_param__eth__call.html#a01\n"));
    // absent scripts stay deferred
    assert!(text.contains("[struct_t_param__eth__get_balance.js]"));
    Ok(())
}

#[test]
fn test_show_resolve_prefers_configured_base_dir() -> TestResult {
    let scripts = tempdir()?;
    let children = tempdir()?;
    let script = scripts.path().join("web3intf_8h.js");
    fs::write(&script, WEB3INTF_8H_JS)?;
    fs::write(children.path().join("struct_t_param__eth__call.js"), CALL_MEMBERS)?;
    let config = IndexConfig {
        base_dir: Some(children.path().to_path_buf()),
        ..lenient()
    };

    let mut out = Vec::new();
    commands::show(Some(&script), false, true, &config, &mut out)?;
    assert!(String::from_utf8(out)?.contains("  to -> struct_t_param__eth__call.html#a04"));

    // the built-in index resolves against the same directory
    let mut out = Vec::new();
    commands::show(None, false, true, &config, &mut out)?;
    assert!(String::from_utf8(out)?.contains("  data -> struct_t_param__eth__call.html#a01"));
    Ok(())
}

#[test]
fn test_show_json() -> TestResult {
    let mut out = Vec::new();
    commands::show(None, true, false, &IndexConfig::default(), &mut out)?;

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value["name"], "web3intf_8h");
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(20));
    Ok(())
}

#[test]
fn test_emit_matches_generator_output() -> TestResult {
    let mut out = Vec::new();
    commands::emit(&mut out)?;
    assert_eq!(String::from_utf8(out)?, WEB3INTF_8H_JS);
    Ok(())
}
