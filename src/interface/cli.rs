//! # Command Line
//!
//! Every option can also be supplied through the environment, which is how MCP client
//! configurations usually launch the server.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::domain::config::RuntimeConfig;

#[derive(Debug, Parser)]
#[command(
    name = "fluffos-mcp",
    version,
    about = "MCP server exposing FluffOS LPC validation, disassembly and documentation lookup"
)]
pub struct Cli {
    /// Directory containing the FluffOS `symbol` and `lpcc` executables
    #[arg(long, env = "FLUFFOS_BIN_DIR")]
    pub bin_dir: PathBuf,

    /// Driver runtime config file (its `mudlib directory` entry enables path rewriting)
    #[arg(long, env = "MUD_RUNTIME_CONFIG")]
    pub config_file: PathBuf,

    /// FluffOS documentation root; enables `fluffos_doc_lookup`
    #[arg(long, env = "FLUFFOS_DOCS_DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Search script invoked as `<script> <docs-dir> <query>`
    #[arg(long, env = "FLUFFOS_DOCS_SCRIPT", default_value = "search_docs.sh")]
    pub docs_script: PathBuf,

    /// Also write logs to this file
    #[arg(long, env = "FLUFFOS_MCP_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_runtime_config(self) -> Result<RuntimeConfig> {
        RuntimeConfig::load(self.bin_dir, self.config_file, self.docs_dir, self.docs_script)
    }
}
