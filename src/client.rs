//! Client session driver.
//!
//! Owns one outbound connection and the two interaction modes layered on
//! top of it: scripted playback (`run`) and the manual console (`console`).
//! Every sent command awaits exactly one response line, bounded by the
//! session's fixed timeout.

use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{KvError, Result};
use crate::protocol;
use crate::script::Script;

/// Outcome of one command/response exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// The server answered within the timeout
    Response(String),

    /// No line arrived within the timeout; the exchange is abandoned, not
    /// retried
    TimedOut,

    /// The server closed its end of the connection
    Closed,
}

/// One live connection to the server
pub struct Session {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    timeout: Duration,
}

impl Session {
    /// Connect to the server.
    ///
    /// The timeout bounds the connect attempt here and every awaited
    /// response afterwards; it is fixed for the life of the session.
    pub fn connect(addr: &str, timeout: Duration) -> Result<Self> {
        let resolved = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| KvError::Network(format!("cannot resolve address {addr}")))?;

        let stream = TcpStream::connect_timeout(&resolved, timeout)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            timeout,
        })
    }

    /// Send one command line and await exactly one response line.
    ///
    /// Callers must not pass a blank line; blank lines are never
    /// transmitted (see [`send_command`]).
    pub fn exchange(&mut self, command: &str) -> Result<Exchange> {
        protocol::write_line(&mut self.writer, command)?;

        match protocol::read_line(&mut self.reader) {
            Ok(Some(line)) => Ok(Exchange::Response(line)),
            Ok(None) => Ok(Exchange::Closed),
            Err(KvError::Io(ref e)) if is_timeout(e.kind()) => Ok(Exchange::TimedOut),
            Err(e) => Err(e),
        }
    }

    /// The fixed response timeout for this session
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// =============================================================================
// Directive loop
// =============================================================================

/// Top-level directive loop: `run`, `console`, or `close`.
///
/// Directives are trimmed and matched case-insensitively; anything else is
/// rejected with a re-prompt. EOF on the operator input ends the session
/// like `close`. Errors returned from here are transport failures that end
/// the whole session.
pub fn drive<R: BufRead>(session: &mut Session, input: &mut R, config: &ClientConfig) -> Result<()> {
    loop {
        tracing::info!(
            "enter 'run' to execute commands from the script, 'console' to enter commands manually, or 'close' to exit"
        );

        let Some(directive) = protocol::read_line(input)? else {
            return Ok(());
        };

        match directive.trim().to_ascii_lowercase().as_str() {
            "run" => run_script(session, &config.script_file)?,
            "console" => run_console(session, input)?,
            "close" => {
                tracing::info!("exiting client");
                return Ok(());
            }
            _ => tracing::info!("invalid input; please enter 'run', 'console', or 'close'"),
        }
    }
}

/// Play the operations script back, one command per line.
///
/// A missing script is logged and control returns to the directive loop; it
/// is not a session-ending failure.
fn run_script(session: &mut Session, path: &Path) -> Result<()> {
    let script = match Script::open(path) {
        Ok(script) => script,
        Err(KvError::ScriptNotFound(path)) => {
            tracing::warn!("script file not found: {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for line in script {
        send_command(session, &line?)?;
    }

    tracing::info!("all operations performed");
    Ok(())
}

/// Manual command mode: one command per prompt until `exit`.
fn run_console<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    tracing::info!("entering manual command mode; type 'exit' to return to the main menu");

    loop {
        print!("Enter command: ");
        io::stdout().flush()?;

        let Some(line) = protocol::read_line(input)? else {
            return Ok(());
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        send_command(session, &line)?;
    }
}

/// Send one command and report its outcome.
///
/// Blank lines are a no-op on the sending side: nothing is transmitted and
/// no response is awaited. A timed out or unanswered exchange is logged and
/// the session proceeds.
fn send_command(session: &mut Session, line: &str) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    tracing::info!("command sent: {}", line);

    match session.exchange(line)? {
        Exchange::Response(response) => tracing::info!("received: {}", response),
        Exchange::TimedOut => tracing::warn!(
            "no response from server within {:?} for command: {}",
            session.timeout(),
            line
        ),
        Exchange::Closed => tracing::warn!("no response from server"),
    }

    Ok(())
}

/// Error kinds raised by a read that hit the socket timeout
fn is_timeout(kind: ErrorKind) -> bool {
    // Unix reports WouldBlock, Windows reports TimedOut
    matches!(kind, ErrorKind::WouldBlock | ErrorKind::TimedOut)
}
