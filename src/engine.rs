//! Engine Module
//!
//! Routes parsed commands to the store and renders the response line for
//! each. The engine owns its store explicitly, so several independent
//! engines can coexist in one process (the tests rely on this).

use std::path::Path;

use crate::error::Result;
use crate::protocol::{self, Command, Response, Verb};
use crate::script::Script;
use crate::store::Store;

/// Dispatches commands against an owned store.
///
/// Every input maps to exactly one [`Response`]; dispatch itself can neither
/// fail nor panic. Arity violations, unknown verbs, and missing keys all
/// come back as `Error:` responses, which keeps the connection handler free
/// of command-specific branching.
pub struct Engine {
    store: Store,
}

impl Engine {
    /// Create an engine with an empty store
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Execute one command, producing the response to send back.
    pub fn execute(&self, command: Command) -> Response {
        match command {
            // Blank lines are skipped before dispatch; a token-less command
            // reaching this point is a protocol violation.
            Command::Noop => Response::error("Malformed request"),
            Command::Request { verb, args } => match verb {
                Verb::Put => self.put(args),
                Verb::Get => self.get(args),
                Verb::Delete => self.delete(args),
                Verb::Other(_) => Response::error("Unknown command"),
            },
        }
    }

    /// Stream a seed script through the dispatcher.
    ///
    /// Each non-blank line is executed exactly as if it had arrived over the
    /// wire; responses are logged instead of sent. Returns the number of
    /// commands executed.
    pub fn populate_from_script(&self, path: &Path) -> Result<usize> {
        let mut executed = 0;
        for line in Script::open(path)? {
            let command = protocol::parse_command(&line?);
            if command.is_noop() {
                continue;
            }
            let response = self.execute(command);
            tracing::debug!("seed: {}", protocol::encode_response(&response));
            executed += 1;
        }
        Ok(executed)
    }

    /// The store this engine dispatches against
    pub fn store(&self) -> &Store {
        &self.store
    }

    // =========================================================================
    // Verb handlers
    // =========================================================================

    /// PUT <key> <value>: insert or overwrite
    fn put(&self, args: Vec<String>) -> Response {
        let Ok([key, value]) = <[String; 2]>::try_from(args) else {
            return Response::error("PUT command requires 2 arguments (key, value)");
        };

        let detail = format!("Key={key}, Value={value} stored.");
        self.store.put(key, value);
        Response::success(detail)
    }

    /// GET <key>: look up
    fn get(&self, args: Vec<String>) -> Response {
        let Ok([key]) = <[String; 1]>::try_from(args) else {
            return Response::error("GET command requires 1 argument (key)");
        };

        match self.store.get(&key) {
            Some(value) => Response::success(format!("Key={key}, Value={value}")),
            None => Response::error("Key not found"),
        }
    }

    /// DELETE <key>: remove
    fn delete(&self, args: Vec<String>) -> Response {
        let Ok([key]) = <[String; 1]>::try_from(args) else {
            return Response::error("DELETE command requires 1 argument (key)");
        };

        match self.store.delete(&key) {
            Some(_) => Response::success(format!("Key={key} deleted.")),
            None => Response::error("Key not found"),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
