//! TCP Server
//!
//! Accepts connections and serves each one on its own thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;

use crate::config::ServerConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::network::Connection;

/// TCP server for linekv
pub struct Server {
    listener: TcpListener,
    engine: Arc<Engine>,
}

impl Server {
    /// Bind the configured listen address.
    ///
    /// The engine is shared with every connection thread; binding is
    /// separate from serving so callers can learn the bound address before
    /// the accept loop starts.
    pub fn bind(config: &ServerConfig, engine: Arc<Engine>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        Ok(Self { listener, engine })
    }

    /// The address actually bound (the configured port may be 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the process exits (blocking).
    ///
    /// Each accepted connection is served to completion on a dedicated
    /// thread; store access stays atomic because the store itself is
    /// locked. A failed accept is logged and the loop keeps going.
    pub fn run(&self) -> Result<()> {
        tracing::info!("listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("error accepting client connection: {}", e);
                    continue;
                }
            };

            let engine = Arc::clone(&self.engine);
            thread::spawn(move || match Connection::new(stream, engine) {
                Ok(mut connection) => {
                    let peer = connection.peer_addr().to_string();
                    if let Err(e) = connection.handle() {
                        tracing::warn!("error in communication with {}: {}", peer, e);
                    }
                }
                Err(e) => tracing::warn!("could not set up connection: {}", e),
            });
        }

        Ok(())
    }
}
