//! # MCP Module
//!
//! Model Context Protocol surface: the `rmcp` server handler and the stdio serving loop.

pub mod server;

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use rmcp::transport::stdio;

use crate::strings::logs;
pub use server::FluffosServer;

/// Serves MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: FluffosServer) -> Result<()> {
    let service = server
        .serve(stdio())
        .await
        .context("Failed to start MCP server on stdio")?;
    tracing::info!("{}", logs::SERVER_RUNNING);

    let reason = service.waiting().await.context("MCP server task failed")?;
    tracing::info!(?reason, "{}", logs::SERVER_STOPPED);
    Ok(())
}
