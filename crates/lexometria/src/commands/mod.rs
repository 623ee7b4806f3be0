//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod batch;
pub mod info;
pub mod parse;
pub mod schema;
pub mod syllables;

/// Path argument meaning standard input.
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read `path`, or standard input when it is `-`, under the size limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() != STDIN_PATH {
        return read_input_file(path, max_bytes);
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!(
            "input too large: stdin is {} bytes (limit: {max} bytes)",
            content.len()
        );
    }
    Ok(content)
}
