//! Source file size limits for the workspace.
//!
//! Library and binary sources are held to a tighter limit than test files,
//! which tend to grow with fixtures. Blank lines and `//` comments do not
//! count toward either limit.

mod common;

use std::fs;
use std::path::Path;

use common::{find_workspace_root, is_test_path, workspace_rust_files};

/// Maximum counted lines for a non-test source file.
const SOURCE_LIMIT: usize = 500;
/// Maximum counted lines for a file under `tests/` or named `*_tests.rs`.
const TEST_LIMIT: usize = 800;

/// Counts lines that are neither blank nor line comments.
fn counted_lines(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

fn limit_for(path: &Path) -> usize {
    if is_test_path(path) {
        TEST_LIMIT
    } else {
        SOURCE_LIMIT
    }
}

#[test]
fn test_files_stay_within_size_limits() {
    let root = find_workspace_root();
    let files = workspace_rust_files();

    let oversized: Vec<String> = files
        .iter()
        .filter_map(|path| {
            let content = fs::read_to_string(path).ok()?;
            let lines = counted_lines(&content);
            let limit = limit_for(path);
            (lines > limit).then(|| {
                let shown = path.strip_prefix(&root).unwrap_or(path);
                format!("  - {}: {lines} lines (limit {limit})", shown.display())
            })
        })
        .collect();

    assert!(
        oversized.is_empty(),
        "Files over the size limit; split them by responsibility:\n{}",
        oversized.join("\n")
    );
}

#[test]
fn test_workspace_has_sources() {
    let files = workspace_rust_files();
    assert!(
        files.iter().any(|p| p.ends_with(Path::new("config/src/lib.rs"))),
        "expected to find the config crate among {} files",
        files.len()
    );
}

#[test]
fn test_counted_lines_skips_blanks_and_comments() {
    let source = "//! Module docs\n\n/// Item docs\nfn store() {\n    // note\n    let tree = 1; // trailing\n}\n";
    assert_eq!(counted_lines(source), 3);
}

#[test]
fn test_test_files_get_the_larger_limit() {
    assert_eq!(
        limit_for(Path::new("crates/config/tests/store_integration_tests.rs")),
        TEST_LIMIT
    );
    assert_eq!(limit_for(Path::new("crates/config/src/store.rs")), SOURCE_LIMIT);
}
