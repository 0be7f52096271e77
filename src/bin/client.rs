//! linekv Client Binary
//!
//! Connects to a linekv server and drives it from the operations script or
//! the interactive console.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use linekv::client::{self, Session};
use linekv::ClientConfig;

/// linekv client
#[derive(Parser, Debug)]
#[command(name = "linekv-client")]
#[command(about = "Scripted and interactive client for the linekv server")]
#[command(version)]
struct Args {
    /// Server hostname or IP address
    host: String,

    /// Server TCP port
    port: u16,

    /// Operations script played back by the 'run' directive
    #[arg(long, default_value = "res/operations-script.txt")]
    script: PathBuf,

    /// Append-only log file
    #[arg(long, default_value = "res/client-log.txt")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    linekv::logging::init(&args.log_file);

    let config = ClientConfig::builder()
        .server_addr(format!("{}:{}", args.host, args.port))
        .script_file(args.script)
        .build();

    tracing::info!("starting linekv client v{}", linekv::VERSION);
    tracing::info!("attempting connection to {}", config.server_addr);

    let mut session = match Session::connect(&config.server_addr, config.response_timeout) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("error connecting to server: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("connection established");

    let stdin = io::stdin();
    if let Err(e) = client::drive(&mut session, &mut stdin.lock(), &config) {
        tracing::error!("session aborted: {}", e);
        std::process::exit(1);
    }
}
