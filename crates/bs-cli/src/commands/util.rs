//! Shared utilities for CLI commands.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::Config;

/// Picks the input file: the command-line argument wins over configuration.
pub fn resolve_input(input: Option<&Path>, config: &Config) -> Result<PathBuf> {
    input
        .or(config.input_file.as_deref())
        .map(Path::to_path_buf)
        .context("no input file: pass one on the command line or set `input_file` in the config")
}

/// Reads the whole input file into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<String> = content.lines().map(String::from).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Appends `text` to `path`, creating the file and its directory on demand.
pub fn append_to_file(path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "appended markdown table");
    Ok(())
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote file");
    Ok(())
}
