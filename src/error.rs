//! Error handling for tinpig.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to parse template descriptor '{path}'. Original error: {e}")]
    ConfigParseError { path: String, e: serde_json::Error },

    #[error("Invalid ignore pattern. Original error: {0}")]
    InvalidIgnorePattern(#[from] regex::Error),

    #[error("Invalid answers: {0}.")]
    InvalidAnswers(String),

    #[error("Cannot expand '~': the HOME environment variable is not set.")]
    HomeDirectoryUnavailable,

    #[error("Template '{name}' was not found in '{templates_dir}'.")]
    TemplateNotFound { name: String, templates_dir: String },

    #[error("No templates found in '{templates_dir}'.")]
    NoTemplates { templates_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExist { template_dir: String },

    #[error("Cannot proceed: the project directory is empty.")]
    EmptyProjectPath,

    #[error("Cannot proceed: destination '{project_path}' already exists.")]
    DestinationExists { project_path: String },

    #[error("Permission denied: '{path}'.")]
    PermissionDenied { path: String },

    /// A file under the project could not be read or rewritten.
    #[error("Cannot substitute tokens in '{path}'. Original error: {source}")]
    Substitution { path: String, source: io::Error },

    #[error("Cannot rename '{from}' to '{to}': the target already exists.")]
    RenameConflict { from: String, to: String },

    #[error("Renaming '{path}' would leave it with an empty name.")]
    InvalidName { path: String },

    /// Any stage failure of a project run, tagged with the attempted path.
    #[error("Unable to create project at '{project_path}': {source}")]
    Pipeline {
        project_path: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Maps an I/O failure on `path`, keeping permission problems distinct.
    pub fn from_io<P: AsRef<std::path::Path>>(path: P, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                Error::PermissionDenied { path: path.as_ref().display().to_string() }
            }
            _ => Error::IoError(e),
        }
    }

    /// Returns the innermost error, looking through `Pipeline` wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Pipeline { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
