//! # MCP Server
//!
//! `rmcp` handler exposing the tool adapter over the Model Context Protocol.
//! Tools are listed and dispatched by hand (not via `#[tool_router]`) because the
//! advertised set depends on runtime configuration.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use crate::application::adapter::ToolAdapter;
use crate::domain::types::{ToolCall, ToolDescriptor, ToolResponse};
use crate::strings::messages;

pub const SERVER_NAME: &str = "fluffos-mcp-server";

#[derive(Clone)]
pub struct FluffosServer {
    adapter: Arc<ToolAdapter>,
}

impl FluffosServer {
    pub fn new(adapter: Arc<ToolAdapter>) -> Self {
        Self { adapter }
    }
}

impl ServerHandler for FluffosServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(messages::SERVER_INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.adapter.list_tools().iter().map(to_mcp_tool).collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let call = ToolCall::new(request.name.into_owned(), request.arguments.unwrap_or_default());
        let response = self.adapter.call(&call).await;
        Ok(to_call_result(response))
    }
}

fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool::new(descriptor.name, descriptor.description, Arc::new(descriptor.input_schema()))
}

/// Every response carries exactly one text block.
fn to_call_result(response: ToolResponse) -> CallToolResult {
    let content = vec![Content::text(response.text)];
    if response.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}
