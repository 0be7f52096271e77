//! linekv Server Binary
//!
//! Starts the TCP server, seeding the store from the population script
//! first.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use linekv::network::Server;
use linekv::{Engine, KvError, ServerConfig};

/// linekv server
#[derive(Parser, Debug)]
#[command(name = "linekv-server")]
#[command(about = "Minimal networked key-value store server")]
#[command(version)]
struct Args {
    /// TCP port to listen on
    port: u16,

    /// Seed script executed against the store before accepting connections
    #[arg(long, default_value = "res/data-population-script.txt")]
    populate: PathBuf,

    /// Append-only log file
    #[arg(long, default_value = "res/server-log.txt")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    linekv::logging::init(&args.log_file);

    tracing::info!("linekv server v{} starting on port {}", linekv::VERSION, args.port);

    let config = ServerConfig::builder()
        .listen_addr(format!("0.0.0.0:{}", args.port))
        .populate_script(args.populate)
        .build();

    let engine = Arc::new(Engine::new());

    // Seed the store before the first client can connect
    match engine.populate_from_script(&config.populate_script) {
        Ok(count) => tracing::info!("data population completed ({} commands)", count),
        Err(KvError::ScriptNotFound(path)) => {
            tracing::warn!("population script not found: {}", path.display());
        }
        Err(e) => {
            tracing::error!("error reading population script: {}", e);
            std::process::exit(1);
        }
    }

    let server = match Server::bind(&config, engine) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
