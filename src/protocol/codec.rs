//! Protocol codec
//!
//! Parsing and encoding for the line-oriented wire protocol, plus the
//! stream helpers both ends use to move lines across the transport.
//!
//! Parsing and encoding live here and nowhere else, so a different framing
//! (length-prefixed, binary) could replace this file without touching the
//! dispatcher or the connection handling.

use std::io::{BufRead, Write};

use crate::error::Result;

use super::{Command, Response, Verb};

/// Prefix carried by every successful response line
pub const SUCCESS_PREFIX: &str = "Success: ";

/// Prefix carried by every error response line
pub const ERROR_PREFIX: &str = "Error: ";

// =============================================================================
// Parsing / Encoding
// =============================================================================

/// Parse one request line into a command.
///
/// The line is split on ASCII whitespace; the first token names the verb
/// (case-insensitively), the remaining tokens are positional arguments taken
/// verbatim. A line with no tokens parses to [`Command::Noop`].
pub fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_ascii_whitespace();
    let Some(first) = tokens.next() else {
        return Command::Noop;
    };

    Command::Request {
        verb: Verb::from_token(first),
        args: tokens.map(str::to_string).collect(),
    }
}

/// Encode a response as a wire line.
///
/// The result never contains an embedded newline; the terminator is supplied
/// by [`write_line`].
pub fn encode_response(response: &Response) -> String {
    match response {
        Response::Success(detail) => format!("{SUCCESS_PREFIX}{detail}"),
        Response::Error(detail) => format!("{ERROR_PREFIX}{detail}"),
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one newline-terminated line from a stream.
///
/// Returns `Ok(None)` when the peer has closed its write side (EOF). The
/// terminator is stripped; CRLF peers are tolerated.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

/// Write one line followed by the terminator and flush immediately.
///
/// The flush matters: the peer must see this line before the next line is
/// read from it.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
