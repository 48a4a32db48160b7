//! Hygiene checks: production sources stay free of panics and silent error loss.
//!
//! Scans `src/` (skipping `*_test.rs`) for patterns the page controller must
//! not ship. A page script that panics takes every remaining behavior down
//! with it, so each budget is zero and stays zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that `pattern` appears on at most `max` lines across production sources.
fn assert_budget(pattern: &str, max: usize) {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found under src/");
    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let listing = hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn no_unwrap() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn no_expect() {
    assert_budget(".expect(", 0);
}

#[test]
fn no_panic_family() {
    assert_budget("panic!(", 0);
    assert_budget("unreachable!(", 0);
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

#[test]
fn no_silent_discard() {
    assert_budget("let _ =", 0);
    assert_budget(".ok()", 0);
}

#[test]
fn no_dead_code_allowances() {
    assert_budget("#[allow(dead_code)]", 0);
}

#[test]
fn no_raw_console_printing() {
    assert_budget("println!(", 0);
    assert_budget("eprintln!(", 0);
}
