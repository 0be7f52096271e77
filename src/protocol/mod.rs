//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (line-oriented ASCII)
//!
//! One request or response per line, newline-terminated, with no framing
//! beyond the line break. A request is the verb followed by its positional
//! arguments, split on ASCII whitespace:
//!
//! ```text
//! PUT <key> <value>   ->  Success: Key=<key>, Value=<value> stored.
//! GET <key>           ->  Success: Key=<key>, Value=<value>
//!                         Error: Key not found
//! DELETE <key>        ->  Success: Key=<key> deleted.
//!                         Error: Key not found
//! <anything else>     ->  Error: Unknown command
//! ```
//!
//! Verb matching is case-insensitive; arguments are taken verbatim. A blank
//! line is never transmitted and never answered. Responses are plain
//! human-readable lines prefixed `Success: ` or `Error: `.

mod codec;
mod command;
mod response;

pub use codec::{
    encode_response, parse_command, read_line, write_line, ERROR_PREFIX, SUCCESS_PREFIX,
};
pub use command::{Command, Verb};
pub use response::Response;
