//! Shared fixtures for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::config::RuntimeConfig;
use crate::domain::error::LaunchError;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::{CommandSpec, ExecutionResult};

/// Configuration rooted at `/mud` with every optional feature enabled.
pub fn sample_config() -> RuntimeConfig {
    RuntimeConfig {
        bin_dir: PathBuf::from("/mud/bin"),
        config_file: PathBuf::from("/mud/etc/config.test"),
        docs_dir: Some(PathBuf::from("/mud/docs")),
        docs_script: PathBuf::from("search_docs.sh"),
        mudlib_dir: Some(PathBuf::from("/mud/lib")),
    }
}

pub fn exited(exit_code: i32, stdout: &str, stderr: &str) -> ExecutionResult {
    ExecutionResult {
        exit_code,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

/// Replays canned outcomes in order and records every command it was asked to run.
/// An `Err(kind)` outcome simulates a launch failure.
pub struct ScriptedRunner {
    outcomes: Mutex<VecDeque<Result<ExecutionResult, io::ErrorKind>>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new(outcomes: Vec<Result<ExecutionResult, io::ErrorKind>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, LaunchError> {
        self.calls.lock().unwrap().push(command.clone());
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedRunner ran out of outcomes");
        outcome.map_err(|kind| LaunchError::new(command.label, io::Error::from(kind)))
    }
}

/// Writes an executable `#!/bin/sh` script into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &std::path::Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
