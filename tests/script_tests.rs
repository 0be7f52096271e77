//! Script Loader Tests
//!
//! The line source must distinguish a missing file from an empty one, keep
//! lines in order, and restart from the top on reopen.

use std::io::Write;
use std::path::Path;

use linekv::script::Script;
use linekv::KvError;
use tempfile::NamedTempFile;

fn collect(path: &Path) -> Vec<String> {
    Script::open(path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_missing_file_is_a_distinct_error() {
    let err = Script::open(Path::new("no/such/file.txt")).unwrap_err();
    match err {
        KvError::ScriptNotFound(path) => assert_eq!(path, Path::new("no/such/file.txt")),
        other => panic!("expected ScriptNotFound, got {other:?}"),
    }
}

#[test]
fn test_empty_file_yields_no_lines() {
    let script = NamedTempFile::new().unwrap();
    assert!(collect(script.path()).is_empty());
}

#[test]
fn test_lines_are_delivered_in_order() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "PUT a 1").unwrap();
    writeln!(script).unwrap();
    writeln!(script, "GET a").unwrap();
    script.flush().unwrap();

    // Blank lines are passed through; skipping them is the caller's call
    assert_eq!(collect(script.path()), vec!["PUT a 1", "", "GET a"]);
}

#[test]
fn test_reopening_restarts_from_the_top() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "GET a").unwrap();
    script.flush().unwrap();

    assert_eq!(collect(script.path()), vec!["GET a"]);
    assert_eq!(collect(script.path()), vec!["GET a"]);
}
