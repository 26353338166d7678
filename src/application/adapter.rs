//! # Tool Adapter
//!
//! Dispatches incoming tool calls to the executors and turns every failure into an
//! error-flagged text response. Stateless between calls: concurrent calls share only
//! the read-only configuration.

use std::sync::Arc;

use crate::application::executors;
use crate::application::tools::{Capabilities, ToolKind};
use crate::domain::config::RuntimeConfig;
use crate::domain::error::ToolError;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::{ToolCall, ToolDescriptor, ToolResponse};
use crate::strings::{logs, messages};

pub struct ToolAdapter {
    config: Arc<RuntimeConfig>,
    capabilities: Capabilities,
    runner: Arc<dyn ProcessRunner>,
}

impl ToolAdapter {
    pub fn new(config: Arc<RuntimeConfig>, runner: Arc<dyn ProcessRunner>) -> Self {
        let capabilities = Capabilities::from_config(&config);
        Self {
            config,
            capabilities,
            runner,
        }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.capabilities.descriptors()
    }

    /// Handles one call. Always produces a response; errors never escape.
    pub async fn call(&self, call: &ToolCall) -> ToolResponse {
        tracing::info!("{}", logs::tool_call(&call.name));

        match self.dispatch(call).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    ToolError::Launch(_) => {
                        tracing::error!("{}", logs::tool_call_failed(&call.name, &err.to_string()))
                    }
                    _ => tracing::warn!("{}", logs::tool_call_failed(&call.name, &err.to_string())),
                }
                ToolResponse::from(err)
            }
        }
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<ToolResponse, ToolError> {
        let kind = ToolKind::from_name(&call.name)
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;

        if !self.capabilities.contains(kind) {
            return Err(ToolError::Unavailable {
                tool: call.name.clone(),
                reason: messages::DOCS_DIR_NOT_CONFIGURED,
            });
        }

        let runner = self.runner.as_ref();
        match kind {
            ToolKind::Validate => {
                let file = call.required_str("file")?;
                executors::validate(&self.config, runner, file).await
            }
            ToolKind::Disassemble => {
                let file = call.required_str("file")?;
                executors::disassemble(&self.config, runner, file).await
            }
            ToolKind::DocLookup => {
                let query = call.required_str("query")?;
                // Capabilities only enable lookup when a docs dir is set
                let docs_dir = self.config.docs_dir.as_deref().ok_or_else(|| {
                    ToolError::Unavailable {
                        tool: call.name.clone(),
                        reason: messages::DOCS_DIR_NOT_CONFIGURED,
                    }
                })?;
                executors::doc_lookup(docs_dir, &self.config.docs_script, runner, query).await
            }
        }
    }
}
