//! # Domain Traits
//!
//! Abstract interface for launching external programs.
//! The Infrastructure layer provides the real implementation; tests substitute fakes.

use async_trait::async_trait;

use crate::domain::error::LaunchError;
use crate::domain::types::{CommandSpec, ExecutionResult};

/// Runs one external program to completion, buffering both output streams.
///
/// This is the only place the adapter touches the OS process API. Implementations must
/// return exactly one `ExecutionResult` per call; a non-zero exit is a normal result,
/// only a failure to start the program is an error.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, LaunchError>;
}
