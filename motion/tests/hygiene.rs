//! Source hygiene for the motion engine.
//!
//! The engine runs inside every page view, where a panic takes the whole
//! controller down with it. These tests scan `src/` (test files excluded)
//! and hold each pattern to a fixed budget.

use std::fs;
use std::path::{Path, PathBuf};

const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "propagate or default instead"),
    (".expect(", "propagate or default instead"),
    ("panic!(", "engine code must not panic"),
    ("unreachable!(", "model the case in the type instead"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "silently discards a value"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "delete unused code"),
    ("println!(", "the engine does not log"),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src")), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    assert!(production_sources().iter().any(|(path, _)| path.ends_with("stage.rs")));
}

#[test]
fn banned_patterns_stay_at_zero() {
    let files = production_sources();
    let mut report = Vec::new();
    for (pattern, reason) in BANNED {
        for (path, content) in &files {
            let hits = content.lines().filter(|line| line.contains(pattern)).count();
            if hits > 0 {
                report.push(format!("  {}: {hits} x `{pattern}` ({reason})", path.display()));
            }
        }
    }
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
