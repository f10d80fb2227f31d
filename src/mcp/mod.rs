//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog inspection to AI assistants over stdio.
//!
//! - `server`: tool router and `run_server` entry point
//! - `types`: tool parameters and JSON result shapes

mod server;
pub mod types;

pub use server::{TsctlMcpServer, run_server};
