//! # Messages
//!
//! Response text returned to MCP clients.
//! The leading markers are stable: clients key off `✓`, `✗` and `Error`.

pub const SERVER_INSTRUCTIONS: &str = "Tools for working with LPC code on a FluffOS driver. \
Use fluffos_validate to compile-check a file, fluffos_disassemble to inspect its bytecode, \
and fluffos_doc_lookup (when available) to search the driver documentation.";

pub const DOCS_DIR_NOT_CONFIGURED: &str = "FLUFFOS_DOCS_DIR is not configured";

pub fn validation_succeeded(output: &str) -> String {
    format!("✓ File validated successfully\n\n{output}")
}

pub fn validation_failed(exit_code: i32, output: &str) -> String {
    format!("✗ Validation failed (exit code: {exit_code})\n\n{output}")
}

pub fn disassembly_failed(exit_code: i32, output: &str) -> String {
    format!("Error (exit code: {exit_code}):\n\n{output}")
}

pub fn docs_found(query: &str, output: &str) -> String {
    format!("Found documentation for \"{query}\":\n\n{output}")
}

pub fn docs_not_found(query: &str) -> String {
    format!("No documentation found for \"{query}\".")
}

pub fn docs_search_failed(detail: &str) -> String {
    format!("Error searching documentation: {detail}")
}
