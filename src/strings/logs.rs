//! # Log Messages
//!
//! Text for operator-facing log lines (written to stderr / the log file, never stdout).

use std::path::Path;

pub const SERVER_STARTING: &str = "Starting FluffOS MCP server...";
pub const SERVER_RUNNING: &str = "FluffOS MCP Server running on stdio";
pub const SERVER_STOPPED: &str = "FluffOS MCP Server stopped";
pub const DOCS_DISABLED: &str = "FLUFFOS_DOCS_DIR not set; fluffos_doc_lookup disabled";

pub fn bin_dir(path: &Path) -> String {
    format!("FluffOS bin directory: {}", path.display())
}

pub fn config_file(path: &Path) -> String {
    format!("FluffOS config file: {}", path.display())
}

pub fn mudlib_dir(path: &Path) -> String {
    format!("Mudlib directory: {}", path.display())
}

pub fn docs_dir(path: &Path) -> String {
    format!("FluffOS docs directory: {}", path.display())
}

pub fn mudlib_dir_missing(config_file: &Path) -> String {
    format!(
        "No 'mudlib directory' entry in {}; file paths will be passed through unchanged",
        config_file.display()
    )
}

pub fn config_unreadable(config_file: &Path, err: &str) -> String {
    format!(
        "Could not read config file {}: {err}; file paths will be passed through unchanged",
        config_file.display()
    )
}

pub fn executable_missing(path: &Path) -> String {
    format!("Driver executable not found: {}", path.display())
}

pub fn tool_call(name: &str) -> String {
    format!("Tool call: {name}")
}

pub fn tool_call_failed(name: &str, err: &str) -> String {
    format!("Tool call {name} failed: {err}")
}

pub fn process_exited(program: &str, exit_code: i32) -> String {
    format!("{program} exited with code {exit_code}")
}
