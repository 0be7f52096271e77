//! Connection Handler
//!
//! Handles one accepted client connection from first line to close.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;
use std::sync::Arc;

use crate::engine::Engine;
use crate::error::{KvError, Result};
use crate::protocol;

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (flushed after every response)
    writer: BufWriter<TcpStream>,

    /// Reference to the shared engine
    engine: Arc<Engine>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler around an accepted stream
    pub fn new(stream: TcpStream, engine: Arc<Engine>) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // The peer must see each response before it sends the next request
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            engine,
            peer_addr,
        })
    }

    /// Serve the connection until the peer closes or an I/O error occurs.
    ///
    /// One request line in, one response line out, flushed before the next
    /// read. Each line is handled independently; the only state shared
    /// across iterations is the engine's store. Blank lines are skipped
    /// without a response.
    pub fn handle(&mut self) -> Result<()> {
        tracing::info!("connection established with {}", self.peer_addr);

        loop {
            let line = match protocol::read_line(&mut self.reader) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    // Client closed its write side
                    tracing::info!("client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(KvError::Io(ref e)) if is_disconnect(e.kind()) => {
                    tracing::debug!("connection lost to {}: {}", self.peer_addr, e);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            tracing::info!("received from {}: {}", self.peer_addr, line);

            let command = protocol::parse_command(&line);
            if command.is_noop() {
                continue;
            }

            let response = self.engine.execute(command);
            let encoded = protocol::encode_response(&response);

            if let Err(e) = protocol::write_line(&mut self.writer, &encoded) {
                // The client may vanish between reading its request and
                // writing the response; that is its prerogative, not a
                // server failure.
                if let KvError::Io(ref io_err) = e {
                    if is_disconnect(io_err.kind()) {
                        tracing::debug!(
                            "client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }

            tracing::info!("sent to {}: {}", self.peer_addr, encoded);
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Error kinds that mean the peer went away rather than the server broke
fn is_disconnect(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UnexpectedEof
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
    )
}
