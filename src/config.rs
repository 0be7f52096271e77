//! Configuration for linekv
//!
//! Centralized configuration with sensible defaults. The server and the
//! client are separate processes with separate knobs, so each gets its own
//! config struct and builder.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the server process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP listen address
    pub listen_addr: String,

    /// Seed script streamed through the dispatcher before the first accept
    pub populate_script: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4000".to_string(),
            populate_script: PathBuf::from("res/data-population-script.txt"),
        }
    }
}

impl ServerConfig {
    /// Create a new config builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig
#[derive(Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the seed script path
    pub fn populate_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.populate_script = path.into();
        self
    }

    pub fn build(self) -> ServerConfig {
        self.config
    }
}

/// Configuration for the client process
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server address (host:port)
    pub server_addr: String,

    /// Maximum wait applied to the connect attempt and to every awaited
    /// response. Fixed for the whole session, not per command.
    pub response_timeout: Duration,

    /// Operations script played back by the `run` directive
    pub script_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:4000".to_string(),
            response_timeout: Duration::from_secs(10),
            script_file: PathBuf::from("res/operations-script.txt"),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the server address (host:port)
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the response timeout
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    /// Set the operations script path
    pub fn script_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.script_file = path.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
