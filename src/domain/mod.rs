//! # Domain Layer
//!
//! Core definitions, types, and traits shared by the adapter.
//! Independent of the MCP transport, serving as the contract for the other layers.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
