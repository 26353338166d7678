//! # Tool Executors
//!
//! One function per tool. Each builds a `CommandSpec`, hands it to the `ProcessRunner`
//! and frames the `ExecutionResult` as response text. Executors differ only in argument
//! construction and formatting; none of them touch the process API directly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::paths::normalize_lpc_path;
use crate::domain::config::RuntimeConfig;
use crate::domain::error::ToolError;
use crate::domain::traits::ProcessRunner;
use crate::domain::types::{CommandSpec, ToolResponse};
use crate::strings::{logs, messages};

/// Runs `symbol <config> <file>`: compiles the object and reports errors.
pub async fn validate(
    config: &RuntimeConfig,
    runner: &dyn ProcessRunner,
    file: &str,
) -> Result<ToolResponse, ToolError> {
    let command = driver_command("symbol", config.symbol_path(), config, file);
    let result = runner.run(&command).await?;
    tracing::debug!("{}", logs::process_exited(command.label, result.exit_code));

    let output = result.combined_output();
    let text = if result.success() {
        messages::validation_succeeded(&output)
    } else {
        messages::validation_failed(result.exit_code, &output)
    };
    Ok(ToolResponse::success(text))
}

/// Runs `lpcc <config> <file>`. Successful output is returned verbatim.
pub async fn disassemble(
    config: &RuntimeConfig,
    runner: &dyn ProcessRunner,
    file: &str,
) -> Result<ToolResponse, ToolError> {
    let command = driver_command("lpcc", config.lpcc_path(), config, file);
    let result = runner.run(&command).await?;
    tracing::debug!("{}", logs::process_exited(command.label, result.exit_code));

    let output = result.combined_output();
    let text = if result.success() {
        output
    } else {
        messages::disassembly_failed(result.exit_code, &output)
    };
    Ok(ToolResponse::success(text))
}

/// Runs `<docs_script> <docs_dir> <query>`.
///
/// Unlike the driver tools, a non-zero exit here means the search itself broke, so it
/// is reported with the error flag set.
pub async fn doc_lookup(
    docs_dir: &Path,
    docs_script: &Path,
    runner: &dyn ProcessRunner,
    query: &str,
) -> Result<ToolResponse, ToolError> {
    let command = CommandSpec {
        label: "documentation search",
        program: docs_script.to_path_buf(),
        args: vec![docs_dir.as_os_str().to_owned(), OsString::from(query)],
        current_dir: None,
    };
    let result = runner.run(&command).await?;
    tracing::debug!("{}", logs::process_exited(command.label, result.exit_code));

    if !result.success() {
        let stderr = result.stderr.trim();
        let detail = if stderr.is_empty() {
            result.stdout.trim()
        } else {
            stderr
        };
        return Ok(ToolResponse::error(messages::docs_search_failed(detail)));
    }

    let found = result.stdout.trim();
    if found.is_empty() {
        Ok(ToolResponse::success(messages::docs_not_found(query)))
    } else {
        Ok(ToolResponse::success(messages::docs_found(query, found)))
    }
}

/// `<exe> <config_file> <normalized file>`, run from the config file's directory.
fn driver_command(
    label: &'static str,
    program: PathBuf,
    config: &RuntimeConfig,
    file: &str,
) -> CommandSpec {
    let lpc_path = normalize_lpc_path(file, config.mudlib_dir.as_deref());
    CommandSpec {
        label,
        program,
        args: vec![config.config_file.as_os_str().to_owned(), OsString::from(lpc_path)],
        current_dir: Some(config.config_dir().to_path_buf()),
    }
}
