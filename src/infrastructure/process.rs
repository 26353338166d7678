//! # Process Runner
//!
//! Spawns external programs with tokio and buffers stdout/stderr until exit.
//! No timeout is applied: a hung tool hangs its call until the client cancels it.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::domain::error::LaunchError;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::{CommandSpec, ExecutionResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, LaunchError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }

        // stdin is the MCP transport; children must never read from it.
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // Dropping the call future (client cancellation) takes the child down with it.
        cmd.kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| LaunchError::new(command.label, e))?;
        let output = child
            .wait_with_output()
            .await
            .map_err(|e| LaunchError::new(command.label, e))?;

        Ok(ExecutionResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
