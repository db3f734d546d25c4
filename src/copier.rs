//! Copies a template's file tree into a new project directory.

use crate::config::Template;
use crate::constants::TEMPLATE_FILE;
use crate::error::{Error, Result};
use log::{debug, warn};
use regex::RegexSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Decides which template entries stay out of generated projects.
pub struct IgnoreFilter {
    patterns: RegexSet,
}

impl IgnoreFilter {
    /// Compiles the template's ignore patterns.
    ///
    /// # Errors
    /// * `Error::InvalidIgnorePattern` if a pattern is not a valid regex
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = RegexSet::new(patterns.iter().map(AsRef::<str>::as_ref))?;
        Ok(Self { patterns })
    }

    /// Returns true if the template-relative path must not be copied.
    ///
    /// Patterns are matched against the relative path with a leading `/`
    /// and `/` separators on every platform, so `.git/config` is tested as
    /// `/.git/config`. The descriptor file is always ignored.
    pub fn is_ignored<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let relative_path = relative_path.as_ref();
        if relative_path.file_name().is_some_and(|name| name == TEMPLATE_FILE) {
            return true;
        }
        let subject: String = relative_path
            .components()
            .map(|c| format!("/{}", c.as_os_str().to_string_lossy()))
            .collect();
        self.patterns.is_match(&subject)
    }
}

fn relative_to<'a>(entry: &'a DirEntry, root: &Path) -> &'a Path {
    entry.path().strip_prefix(root).unwrap_or(entry.path())
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source).map_err(|e| Error::from_io(source, e))?;
    std::os::unix::fs::symlink(link, target).map_err(|e| Error::from_io(target, e))
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).map(|_| ()).map_err(|e| Error::from_io(target, e))
}

fn copy_tree(template_root: &Path, project_path: &Path, filter: &IgnoreFilter) -> Result<()> {
    let walker = WalkDir::new(template_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let relative = relative_to(entry, template_root);
            if relative.as_os_str().is_empty() {
                return true;
            }
            let ignored = filter.is_ignored(relative);
            if ignored {
                debug!("Skipping ignored path '{}'", relative.display());
            }
            !ignored
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_default();
            Error::from_io(path, e.into())
        })?;
        let relative = relative_to(&entry, template_root);
        let target = project_path.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::from_io(&target, e))?;
        } else if file_type.is_symlink() {
            debug!("Linking '{}'", target.display());
            copy_symlink(entry.path(), &target)?;
        } else {
            debug!("Copying '{}'", target.display());
            fs::copy(entry.path(), &target).map_err(|e| Error::from_io(&target, e))?;
        }
    }
    Ok(())
}

/// Copies the template tree into `project_path`.
///
/// The destination must not exist. If copying fails after the destination
/// was created, the partial tree is removed before the error is returned.
///
/// # Errors
/// * `Error::EmptyProjectPath` if `project_path` is empty
/// * `Error::DestinationExists` if `project_path` exists
/// * `Error::TemplateDoesNotExist` if the template directory is missing
/// * `Error::InvalidIgnorePattern` if an ignore pattern does not compile
/// * `Error::PermissionDenied` / `Error::IoError` on file system failures
pub fn copy_template<P: AsRef<Path>>(template: &Template, project_path: P) -> Result<PathBuf> {
    let project_path = project_path.as_ref();
    if project_path.as_os_str().is_empty() {
        return Err(Error::EmptyProjectPath);
    }
    if fs::symlink_metadata(project_path).is_ok() {
        return Err(Error::DestinationExists {
            project_path: project_path.display().to_string(),
        });
    }
    if !template.path.is_dir() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template.path.display().to_string(),
        });
    }
    let filter = IgnoreFilter::new(&template.ignore)?;

    debug!(
        "Copying template '{}' from '{}' to '{}'",
        template.name,
        template.path.display(),
        project_path.display()
    );
    if let Err(e) = copy_tree(&template.path, project_path, &filter) {
        if project_path.exists() {
            warn!("Removing partially copied project at '{}'", project_path.display());
            if let Err(cleanup) = fs::remove_dir_all(project_path) {
                warn!("Could not remove '{}': {}", project_path.display(), cleanup);
            }
        }
        return Err(e);
    }
    Ok(project_path.to_path_buf())
}
