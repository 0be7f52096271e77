//! Engine Tests
//!
//! Dispatch semantics: the arity table, store effects, and seed population.

use std::io::Write;

use linekv::protocol::{encode_response, parse_command, Command};
use linekv::{Engine, KvError};
use tempfile::NamedTempFile;

/// Run one request line through the dispatcher and return the wire line
fn exec(engine: &Engine, line: &str) -> String {
    encode_response(&engine.execute(parse_command(line)))
}

// =============================================================================
// Store Semantics Tests
// =============================================================================

#[test]
fn test_put_then_get() {
    let engine = Engine::new();
    assert_eq!(exec(&engine, "PUT name alice"), "Success: Key=name, Value=alice stored.");
    assert_eq!(exec(&engine, "GET name"), "Success: Key=name, Value=alice");
}

#[test]
fn test_put_is_last_write_wins() {
    let engine = Engine::new();
    exec(&engine, "PUT k v1");
    assert_eq!(exec(&engine, "PUT k v2"), "Success: Key=k, Value=v2 stored.");
    assert_eq!(exec(&engine, "GET k"), "Success: Key=k, Value=v2");
    assert_eq!(engine.store().len(), 1);
}

#[test]
fn test_get_missing_key() {
    let engine = Engine::new();
    assert_eq!(exec(&engine, "GET nothing"), "Error: Key not found");
}

#[test]
fn test_delete_then_get() {
    let engine = Engine::new();
    exec(&engine, "PUT k v");
    assert_eq!(exec(&engine, "DELETE k"), "Success: Key=k deleted.");
    assert_eq!(exec(&engine, "GET k"), "Error: Key not found");
}

#[test]
fn test_delete_missing_or_already_deleted_key() {
    let engine = Engine::new();
    assert_eq!(exec(&engine, "DELETE k"), "Error: Key not found");
    exec(&engine, "PUT k v");
    exec(&engine, "DELETE k");
    assert_eq!(exec(&engine, "DELETE k"), "Error: Key not found");
}

// =============================================================================
// Arity and Verb Tests
// =============================================================================

#[test]
fn test_arity_violations_are_independent_of_store_contents() {
    let engine = Engine::new();
    exec(&engine, "PUT a b");

    let cases = [
        ("PUT a", "Error: PUT command requires 2 arguments (key, value)"),
        ("PUT a b c", "Error: PUT command requires 2 arguments (key, value)"),
        ("GET", "Error: GET command requires 1 argument (key)"),
        ("GET a b", "Error: GET command requires 1 argument (key)"),
        ("DELETE", "Error: DELETE command requires 1 argument (key)"),
        ("DELETE a b", "Error: DELETE command requires 1 argument (key)"),
    ];
    for (line, expected) in cases {
        assert_eq!(exec(&engine, line), expected, "line {line:?}");
    }

    // The stored entry survived every rejected request
    assert_eq!(exec(&engine, "GET a"), "Success: Key=a, Value=b");
}

#[test]
fn test_unknown_verb_in_any_case() {
    let engine = Engine::new();
    for line in ["FOO a b", "foo a b", "FoO", "push k v"] {
        assert_eq!(exec(&engine, line), "Error: Unknown command", "line {line:?}");
    }
}

#[test]
fn test_dispatched_noop_is_malformed() {
    let engine = Engine::new();
    let response = engine.execute(Command::Noop);
    assert_eq!(encode_response(&response), "Error: Malformed request");
    assert!(engine.store().is_empty());
}

// =============================================================================
// Instance Isolation Tests
// =============================================================================

#[test]
fn test_engines_are_independent() {
    let first = Engine::new();
    let second = Engine::new();
    exec(&first, "PUT shared v");
    assert_eq!(exec(&second, "GET shared"), "Error: Key not found");
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_full_command_sequence() {
    let engine = Engine::new();
    let exchanges = [
        ("PUT x 1", "Success: Key=x, Value=1 stored."),
        ("GET x", "Success: Key=x, Value=1"),
        ("PUT x 2", "Success: Key=x, Value=2 stored."),
        ("GET x", "Success: Key=x, Value=2"),
        ("DELETE x", "Success: Key=x deleted."),
        ("GET x", "Error: Key not found"),
    ];
    for (request, expected) in exchanges {
        assert_eq!(exec(&engine, request), expected, "request {request:?}");
    }
}

// =============================================================================
// Seed Population Tests
// =============================================================================

#[test]
fn test_populate_from_script() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "PUT user alice").unwrap();
    writeln!(script).unwrap();
    writeln!(script, "PUT role admin").unwrap();
    writeln!(script, "DELETE missing").unwrap();
    script.flush().unwrap();

    let engine = Engine::new();
    let executed = engine.populate_from_script(script.path()).unwrap();

    // The blank line is skipped; the failing DELETE still counts as executed
    assert_eq!(executed, 3);
    assert_eq!(exec(&engine, "GET user"), "Success: Key=user, Value=alice");
    assert_eq!(exec(&engine, "GET role"), "Success: Key=role, Value=admin");
    assert_eq!(engine.store().len(), 2);
}

#[test]
fn test_populate_missing_script() {
    let engine = Engine::new();
    let err = engine
        .populate_from_script("no/such/script.txt".as_ref())
        .unwrap_err();
    assert!(matches!(err, KvError::ScriptNotFound(_)));
    assert!(engine.store().is_empty());
}
