//! # linekv
//!
//! A minimal networked key-value store: an in-memory string-to-string map
//! served over a line-oriented ASCII protocol on TCP, plus the client that
//! drives it from a script file or an interactive console.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐   one line per request    ┌──────────────────┐
//! │  Session Driver  │ ─────────────────────────▶│  Connection      │
//! │  (client)        │                           │  (one thread per │
//! │                  │◀───────────────────────── │   accepted peer) │
//! └──────────────────┘   one line per response   └────────┬─────────┘
//!                                                         │
//!                                                ┌────────▼─────────┐
//!                                                │     Engine       │
//!                                                │ (parse→dispatch) │
//!                                                └────────┬─────────┘
//!                                                         │
//!                                                ┌────────▼─────────┐
//!                                                │      Store       │
//!                                                │ (RwLock HashMap) │
//!                                                └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod client;
pub mod engine;
pub mod logging;
pub mod network;
pub mod protocol;
pub mod script;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{ClientConfig, ServerConfig};
pub use engine::Engine;
pub use error::{KvError, Result};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
