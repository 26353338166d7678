//! # Configuration
//!
//! Process-wide runtime configuration, built once at startup from the CLI/environment
//! and the FluffOS driver config file. Never mutated afterwards.

use anyhow::{Context, Result, bail};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::strings::logs;

/// Executable name of the FluffOS symbol tool (compile + validate).
pub const SYMBOL_EXECUTABLE: &str = "symbol";
/// Executable name of the FluffOS LPC compiler / disassembler.
pub const LPCC_EXECUTABLE: &str = "lpcc";

static MUDLIB_DIRECTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^mudlib directory[ \t]*:[ \t]*(.*?)[ \t\r]*$").expect("mudlib directory pattern is valid")
});

/// Read-only configuration shared (via `Arc`) by every tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding the `symbol` and `lpcc` executables.
    pub bin_dir: PathBuf,
    /// Driver runtime config file, passed as the first argument to both executables.
    pub config_file: PathBuf,
    /// Documentation root. When absent, documentation lookup is not offered.
    pub docs_dir: Option<PathBuf>,
    /// Script invoked as `<script> <docs_dir> <query>`.
    pub docs_script: PathBuf,
    /// Mudlib root discovered in the driver config file.
    pub mudlib_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Builds the configuration, reading the driver config file once to discover the
    /// mudlib root. A missing or unreadable config file only disables path rewriting.
    pub fn load(
        bin_dir: PathBuf,
        config_file: PathBuf,
        docs_dir: Option<PathBuf>,
        docs_script: PathBuf,
    ) -> Result<Self> {
        if bin_dir.as_os_str().is_empty() {
            bail!("FLUFFOS_BIN_DIR environment variable not set");
        }
        if config_file.as_os_str().is_empty() {
            bail!("MUD_RUNTIME_CONFIG environment variable not set");
        }

        // The executables run with the config file's directory as cwd, so relative
        // inputs are pinned to the launch directory here.
        let bin_dir = std::path::absolute(&bin_dir)
            .with_context(|| format!("Invalid bin directory: {}", bin_dir.display()))?;
        let config_file = std::path::absolute(&config_file)
            .with_context(|| format!("Invalid config file path: {}", config_file.display()))?;

        let mudlib_dir = match std::fs::read_to_string(&config_file) {
            Ok(contents) => {
                let found = parse_mudlib_dir(&contents);
                if found.is_none() {
                    tracing::warn!("{}", logs::mudlib_dir_missing(&config_file));
                }
                found
            }
            Err(e) => {
                tracing::warn!("{}", logs::config_unreadable(&config_file, &e.to_string()));
                None
            }
        };

        Ok(Self {
            bin_dir,
            config_file,
            docs_dir: docs_dir.filter(|dir| !dir.as_os_str().is_empty()),
            docs_script,
            mudlib_dir,
        })
    }

    pub fn symbol_path(&self) -> PathBuf {
        self.bin_dir.join(SYMBOL_EXECUTABLE)
    }

    pub fn lpcc_path(&self) -> PathBuf {
        self.bin_dir.join(LPCC_EXECUTABLE)
    }

    /// Working directory for the driver tools: the directory holding the config file.
    pub fn config_dir(&self) -> &Path {
        match self.config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Driver executables that are not present in the bin directory.
    pub fn missing_executables(&self) -> Vec<PathBuf> {
        [self.symbol_path(), self.lpcc_path()]
            .into_iter()
            .filter(|path| !path.is_file())
            .collect()
    }
}

/// Extracts the value of the first `mudlib directory : <path>` line.
pub fn parse_mudlib_dir(contents: &str) -> Option<PathBuf> {
    MUDLIB_DIRECTORY
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
