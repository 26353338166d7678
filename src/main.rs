//! # Main Entry Point
//!
//! Initializes the FluffOS MCP server:
//! - Interface: CLI / environment configuration
//! - Domain: Runtime configuration and types
//! - Application: Tool adapter (advertisement, dispatch, executors)
//! - Infrastructure: Process runner, MCP transport, logging
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use crate::application::adapter::ToolAdapter;
use crate::infrastructure::mcp::{self, FluffosServer};
use crate::infrastructure::process::TokioProcessRunner;
use crate::interface::cli::Cli;
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parse CLI / environment (exits with a diagnostic on missing required values)
    let cli = Cli::parse();

    // 2. Logging Setup (stderr + optional file; stdout is reserved for MCP)
    let _log_guard = infrastructure::logging::init(cli.log_file.as_deref())?;
    tracing::info!("{}", logs::SERVER_STARTING);

    // 3. Runtime Configuration
    let config = Arc::new(cli.into_runtime_config()?);
    tracing::info!("{}", logs::bin_dir(&config.bin_dir));
    tracing::info!("{}", logs::config_file(&config.config_file));
    if let Some(mudlib) = &config.mudlib_dir {
        tracing::info!("{}", logs::mudlib_dir(mudlib));
    }
    match &config.docs_dir {
        Some(docs) => tracing::info!("{}", logs::docs_dir(docs)),
        None => tracing::info!("{}", logs::DOCS_DISABLED),
    }
    for missing in config.missing_executables() {
        tracing::warn!("{}", logs::executable_missing(&missing));
    }

    // 4. Adapter + Transport
    let adapter = Arc::new(ToolAdapter::new(config, Arc::new(TokioProcessRunner)));
    if let Ok(tools) = serde_json::to_string(&adapter.list_tools()) {
        tracing::debug!(%tools, "Advertised tools");
    }

    mcp::serve_stdio(FluffosServer::new(adapter)).await
}
