//! # Infrastructure Layer
//!
//! Handles interactions with external systems: child processes, the MCP transport and
//! log sinks. Implements the traits defined in the Domain layer (e.g., ProcessRunner).

pub mod logging;
pub mod mcp;
pub mod process;
