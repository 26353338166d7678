//! # Interface Layer
//!
//! Process entry surface: command-line arguments and their environment fallbacks.

pub mod cli;
