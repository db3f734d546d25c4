//! Template catalog.
//! Templates live in one directory, each in a subdirectory with its own
//! `tinpig.json` descriptor.

use crate::config::{load_template, Template};
use crate::constants::{DEFAULT_TEMPLATES_DIR, TEMPLATE_FILE};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Picks the templates directory: the explicit option, then the
/// `TINPIG_TEMPLATES_DIR` variable, then `~/.tinpig/templates`.
pub fn templates_dir(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    home.map(|h| h.join(DEFAULT_TEMPLATES_DIR)).ok_or(Error::HomeDirectoryUnavailable)
}

/// Read-only view over the templates directory.
pub struct TemplateCatalog {
    root: PathBuf,
}

impl TemplateCatalog {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns every template in the catalog, sorted by name.
    ///
    /// Subdirectories without a descriptor are skipped.
    pub fn list(&self) -> Result<Vec<Template>> {
        let entries = fs::read_dir(&self.root).map_err(|e| Error::from_io(&self.root, e))?;
        let mut templates = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::from_io(&self.root, e))?.path();
            if !path.is_dir() {
                continue;
            }
            if !path.join(TEMPLATE_FILE).is_file() {
                debug!("Skipping '{}': no {}", path.display(), TEMPLATE_FILE);
                continue;
            }
            templates.push(load_template(&path)?);
        }
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    /// Finds a template by directory name or by its declared name.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no template matches
    pub fn find(&self, name: &str) -> Result<Template> {
        let direct = self.root.join(name);
        if direct.join(TEMPLATE_FILE).is_file() {
            return load_template(direct);
        }
        self.list()?
            .into_iter()
            .find(|template| template.name == name)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
                templates_dir: self.root.display().to_string(),
            })
    }
}
