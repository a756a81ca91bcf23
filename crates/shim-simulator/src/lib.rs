//! An ikura shim that simulates the DA layer in memory.
//!
//! Rollup nodes talk to it exactly as they would to a shim connected to a real ikura node,
//! which makes it suitable for local development and for testing DA adapters end to end.

pub mod cli;
mod da;
mod dock;
pub mod logging;
mod server;

pub use da::*;
pub use dock::{rollkit_methods, RollkitDock};
pub use server::start_server;
