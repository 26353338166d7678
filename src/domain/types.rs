//! # Domain Types
//!
//! Request-scoped data structures flowing through the adapter.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::error::ToolError;

/// Advertised shape of a callable tool: one required string field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input: InputField,
}

/// The single required string argument a tool accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub name: &'static str,
    pub description: &'static str,
}

impl ToolDescriptor {
    /// JSON schema object for the tool input.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(
            self.input.name.to_string(),
            json!({
                "type": "string",
                "description": self.input.description,
            }),
        );

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!([self.input.name]));
        schema
    }
}

/// An incoming call: tool name plus its raw arguments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Returns a required, non-empty string argument.
    pub fn required_str(&self, field: &'static str) -> Result<&str, ToolError> {
        self.arguments
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(ToolError::MissingArgument(field))
    }
}

/// A fully specified external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Short name used in launch-failure messages (e.g. `symbol`).
    pub label: &'static str,
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// `None` inherits the server's working directory.
    pub current_dir: Option<PathBuf>,
}

/// Outcome of a program that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Process exit code; `-1` when terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// stdout followed by stderr, trimmed.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr).trim().to_string()
    }
}

/// The adapter's only output: one text block plus an error flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<ToolError> for ToolResponse {
    fn from(err: ToolError) -> Self {
        Self::error(format!("Error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_output_orders_stdout_first_and_trims() {
        let result = ExecutionResult {
            exit_code: 1,
            stdout: "\nline one\n".to_string(),
            stderr: "warning: two\n\n".to_string(),
        };
        assert_eq!(result.combined_output(), "line one\nwarning: two");
        assert!(!result.success());
    }

    #[test]
    fn test_required_str() {
        let call: ToolCall = serde_json::from_value(json!({
            "name": "fluffos_validate",
            "arguments": { "file": "/mud/lib/obj/sword.c", "count": 3, "empty": "" }
        }))
        .unwrap();

        assert_eq!(call.required_str("file").unwrap(), "/mud/lib/obj/sword.c");
        assert!(matches!(call.required_str("count"), Err(ToolError::MissingArgument("count"))));
        assert!(matches!(call.required_str("empty"), Err(ToolError::MissingArgument("empty"))));
        assert!(matches!(call.required_str("query"), Err(ToolError::MissingArgument("query"))));
    }

    #[test]
    fn test_call_without_arguments_deserializes() {
        let call: ToolCall = serde_json::from_value(json!({ "name": "fluffos_validate" })).unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_input_schema_shape() {
        let descriptor = ToolDescriptor {
            name: "fluffos_validate",
            description: "Validate an LPC file",
            input: InputField {
                name: "file",
                description: "Absolute path to the LPC file to validate",
            },
        };

        assert_eq!(
            Value::Object(descriptor.input_schema()),
            json!({
                "type": "object",
                "properties": {
                    "file": {
                        "type": "string",
                        "description": "Absolute path to the LPC file to validate"
                    }
                },
                "required": ["file"]
            })
        );
    }

    #[test]
    fn test_error_response_prefix() {
        let response = ToolResponse::from(ToolError::UnknownTool("bogus".to_string()));
        assert!(response.is_error);
        assert_eq!(response.text, "Error: Unknown tool: bogus");
    }
}
