//! Token substitution in file contents and in file and directory names.

use crate::error::{Error, Result};
use crate::tokens::TokenSet;
use log::debug;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static CONTENT_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^{}]*)\}").expect("placeholder pattern is a valid regex")
});

/// Replaces every `${name}` whose name is in `tokens`.
///
/// The text is scanned once, so substituted values are never scanned
/// again. Placeholders for unknown names are left as they are.
pub fn replace_placeholders<'a>(content: &'a str, tokens: &TokenSet) -> Cow<'a, str> {
    CONTENT_PLACEHOLDER.replace_all(content, |caps: &Captures| match tokens.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

fn substitution_error(path: &Path, source: std::io::Error) -> Error {
    Error::Substitution { path: path.display().to_string(), source }
}

/// Rewrites the contents of every file under `project_path`.
///
/// Files that are not valid UTF-8 are left untouched, and files without
/// placeholders are not rewritten.
///
/// # Errors
/// * `Error::Substitution` for the first file that cannot be read or written
pub fn replace_tokens_in_files<P: AsRef<Path>>(project_path: P, tokens: &TokenSet) -> Result<()> {
    if tokens.is_empty() {
        return Ok(());
    }
    for entry in WalkDir::new(project_path.as_ref()).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_default();
            substitution_error(&path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = fs::read(path).map_err(|e| substitution_error(path, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!("Skipping non UTF-8 file '{}'", path.display());
                continue;
            }
        };
        if let Cow::Owned(replaced) = replace_placeholders(&content, tokens) {
            debug!("Substituting tokens in '{}'", path.display());
            fs::write(path, replaced).map_err(|e| substitution_error(path, e))?;
        }
    }
    Ok(())
}

/// Computes the new name for `name`, or `None` if it has no `%token%` marker.
///
/// Each token replaces the first occurrence of its marker in the original
/// name. Like content substitution, inserted values are never scanned for
/// further markers. Where two markers overlap the leftmost one wins.
pub fn substitute_name(name: &str, tokens: &TokenSet) -> Option<String> {
    let mut markers: Vec<(usize, usize, &str)> = tokens
        .iter()
        .filter_map(|(token, value)| {
            let marker = format!("%{token}%");
            name.find(&marker).map(|start| (start, marker.len(), value.as_str()))
        })
        .collect();
    if markers.is_empty() {
        return None;
    }
    markers.sort_by_key(|&(start, _, _)| start);

    let mut renamed = String::with_capacity(name.len());
    let mut cursor = 0;
    for (start, len, value) in markers {
        if start < cursor {
            continue;
        }
        renamed.push_str(&name[cursor..start]);
        renamed.push_str(value);
        cursor = start + len;
    }
    renamed.push_str(&name[cursor..]);
    Some(renamed)
}

fn rename_entry(from: &Path, new_name: &str) -> Result<PathBuf> {
    if new_name.is_empty() {
        return Err(Error::InvalidName { path: from.display().to_string() });
    }
    let to = from.with_file_name(new_name);
    if fs::symlink_metadata(&to).is_ok() {
        return Err(Error::RenameConflict {
            from: from.display().to_string(),
            to: to.display().to_string(),
        });
    }
    debug!("Renaming '{}' to '{}'", from.display(), to.display());
    fs::rename(from, &to).map_err(|e| Error::from_io(from, e))?;
    Ok(to)
}

/// Renames every entry under `dir` whose name carries a `%token%` marker.
///
/// Each directory is listed in full before anything in it is renamed, and
/// a renamed directory is descended into at its new path.
///
/// # Errors
/// * `Error::RenameConflict` if the new name is already taken
/// * `Error::InvalidName` if substitution leaves an empty name
pub fn rename_files_with_tokens<P: AsRef<Path>>(dir: P, tokens: &TokenSet) -> Result<()> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::from_io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::from_io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_type = entry.file_type().map_err(|e| Error::from_io(entry.path(), e))?;
        let name = entry.file_name();
        let path = match substitute_name(&name.to_string_lossy(), tokens) {
            Some(new_name) => rename_entry(&entry.path(), &new_name)?,
            None => entry.path(),
        };
        if file_type.is_dir() {
            rename_files_with_tokens(&path, tokens)?;
        }
    }
    Ok(())
}
