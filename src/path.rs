//! Project path resolution.

use crate::constants::prompts::PROJECT_DIRECTORY;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::path::{Path, PathBuf};

/// Expands a leading `~` in `raw` using `home`.
///
/// Everything after the tilde, minus leading separators, is joined onto
/// `home`, so `~projects` and `~/projects` resolve to the same directory.
/// Paths without a leading tilde are returned unchanged.
pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(PathBuf::from(raw));
    };
    let home = home.ok_or(Error::HomeDirectoryUnavailable)?;
    let rest = rest.trim_start_matches(['/', '\\']);
    let resolved = if rest.is_empty() { home.to_path_buf() } else { home.join(rest) };
    debug!("Expanded '{}' to '{}'", raw, resolved.display());
    Ok(resolved)
}

/// Reads the home directory from the environment.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
}

/// Returns the raw project directory, prompting when `path` is absent or empty.
///
/// The answer is returned as typed; pass it to [`expand_home`] to resolve it.
pub fn read_project_path(prompter: &dyn Prompter, path: Option<&str>) -> Result<String> {
    match path.filter(|p| !p.is_empty()) {
        Some(p) => Ok(p.to_string()),
        None => prompter.input(PROJECT_DIRECTORY),
    }
}
