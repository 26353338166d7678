//! # Tool Errors
//!
//! Failures raised while handling a single tool call. Every variant is converted to an
//! error-flagged text response at the dispatch boundary; none of them stop the server.
//!
//! A driver tool exiting non-zero is *not* represented here: that is an expected
//! outcome reported as framed text.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested name is not one of the known tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool exists but its prerequisite configuration is missing.
    #[error("Tool {tool} is unavailable: {reason}")]
    Unavailable { tool: String, reason: &'static str },

    /// A required argument is absent, not a string, or empty.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// An external program could not be started (not found, not executable, bad cwd).
#[derive(Debug, Error)]
#[error("Failed to run {program}: {source}")]
pub struct LaunchError {
    pub program: &'static str,
    #[source]
    pub source: io::Error,
}

impl LaunchError {
    pub fn new(program: &'static str, source: io::Error) -> Self {
        Self { program, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_message_names_program() {
        let err = ToolError::from(LaunchError::new(
            "symbol",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        ));
        assert_eq!(err.to_string(), "Failed to run symbol: No such file or directory");
    }

    #[test]
    fn test_unavailable_message() {
        let err = ToolError::Unavailable {
            tool: "fluffos_doc_lookup".to_string(),
            reason: "FLUFFOS_DOCS_DIR is not configured",
        };
        assert_eq!(
            err.to_string(),
            "Tool fluffos_doc_lookup is unavailable: FLUFFOS_DOCS_DIR is not configured"
        );
    }
}
