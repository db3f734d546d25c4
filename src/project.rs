//! Project creation pipeline.
//! Resolves the project path, collects token values, copies the template
//! and substitutes tokens in file contents and names, in that order.

use crate::config::Template;
use crate::copier::copy_template;
use crate::error::{Error, Result};
use crate::path::{expand_home, home_dir, read_project_path};
use crate::prompt::Prompter;
use crate::substitute::{rename_files_with_tokens, replace_tokens_in_files};
use crate::tokens::{collect_tokens, TokenSet};
use log::info;
use std::path::{Path, PathBuf};

/// Creates projects from templates.
pub struct ProjectMaker<'a> {
    prompter: &'a dyn Prompter,
    home: Option<PathBuf>,
    answers: serde_json::Map<String, serde_json::Value>,
}

impl<'a> ProjectMaker<'a> {
    /// Creates a maker that reads the home directory from `HOME`.
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter, home: home_dir(), answers: serde_json::Map::new() }
    }

    /// Overrides the directory `~` expands to.
    pub fn with_home<P: Into<PathBuf>>(mut self, home: Option<P>) -> Self {
        self.home = home.map(Into::into);
        self
    }

    /// Supplies token values that are used instead of prompting.
    pub fn with_answers(mut self, answers: serde_json::Map<String, serde_json::Value>) -> Self {
        self.answers = answers;
        self
    }

    /// Instantiates `template` at `path`, prompting for anything missing.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The resolved project path
    ///
    /// # Errors
    /// * `Error::Pipeline` wrapping the failure of whichever stage failed,
    ///   with the attempted project path
    pub fn make_project(&self, path: Option<&str>, template: &Template) -> Result<PathBuf> {
        let raw_path = read_project_path(self.prompter, path)
            .map_err(|e| pipeline_error(Path::new(path.unwrap_or_default()), e))?;
        let project_path = expand_home(&raw_path, self.home.as_deref())
            .map_err(|e| pipeline_error(Path::new(&raw_path), e))?;

        self.build(&project_path, template)
            .map_err(|e| pipeline_error(&project_path, e))?;

        Ok(project_path)
    }

    fn build(&self, project_path: &Path, template: &Template) -> Result<()> {
        let tokens: TokenSet = collect_tokens(self.prompter, &template.tokens, &self.answers)?;

        info!("Copying template '{}' to '{}'", template.name, project_path.display());
        copy_template(template, project_path)?;

        info!("Substituting {} token(s) in file contents", tokens.len());
        replace_tokens_in_files(project_path, &tokens)?;

        info!("Substituting tokens in file and directory names");
        rename_files_with_tokens(project_path, &tokens)?;
        Ok(())
    }
}

fn pipeline_error(project_path: &Path, e: Error) -> Error {
    Error::Pipeline { project_path: project_path.display().to_string(), source: Box::new(e) }
}
