//! Template descriptor handling.
//! A template directory carries a `tinpig.json` file describing its tokens
//! and the paths to leave out of generated projects.

use crate::constants::TEMPLATE_FILE;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A value the user supplies when a project is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub name: String,
    #[serde(default)]
    pub default: Option<String>,
}

impl Token {
    pub fn new<S: Into<String>>(name: S, default: Option<&str>) -> Self {
        Self { name: name.into(), default: default.map(str::to_string) }
    }
}

/// On-disk shape of `tinpig.json`.
#[derive(Debug, Default, Deserialize)]
struct Descriptor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tokens: Vec<Token>,
    #[serde(default)]
    ignore: Option<Vec<String>>,
}

/// A template ready to be instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub description: Option<String>,
    /// Source directory copied into new projects.
    pub path: PathBuf,
    /// Tokens in the order they are prompted for.
    pub tokens: Vec<Token>,
    /// Regular expressions matched against template-relative paths.
    pub ignore: Vec<String>,
}

impl Template {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self {
            name: name.into(),
            description: None,
            path: path.into(),
            tokens: Vec::new(),
            ignore: Vec::new(),
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_ignore<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.ignore = patterns.into_iter().map(Into::into).collect();
        self
    }
}

/// Parses descriptor content for the template rooted at `template_dir`.
///
/// The template name falls back to the directory name when the descriptor
/// does not declare one.
pub fn parse_template<P: AsRef<Path>>(content: &str, template_dir: P) -> Result<Template> {
    let template_dir = template_dir.as_ref();
    let descriptor: Descriptor = serde_json::from_str(content).map_err(|e| {
        Error::ConfigParseError {
            path: template_dir.join(TEMPLATE_FILE).display().to_string(),
            e,
        }
    })?;

    let name = descriptor.name.unwrap_or_else(|| {
        template_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    Ok(Template {
        name,
        description: descriptor.description,
        path: template_dir.to_path_buf(),
        tokens: descriptor.tokens,
        ignore: descriptor.ignore.unwrap_or_default(),
    })
}

/// Loads the descriptor of the template in `template_dir`.
///
/// # Errors
/// * `Error::TemplateDoesNotExist` if the directory has no `tinpig.json`
/// * `Error::ConfigParseError` if the descriptor is not valid JSON
pub fn load_template<P: AsRef<Path>>(template_dir: P) -> Result<Template> {
    let template_dir = template_dir.as_ref();
    let descriptor_path = template_dir.join(TEMPLATE_FILE);
    if !descriptor_path.is_file() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template_dir.display().to_string(),
        });
    }

    debug!("Loading template descriptor from {}", descriptor_path.display());
    let content = std::fs::read_to_string(&descriptor_path)
        .map_err(|e| Error::from_io(&descriptor_path, e))?;
    parse_template(&content, template_dir)
}
