//! tinpig creates new projects from templates.
//! A template is a directory tree whose file contents may hold `${token}`
//! placeholders and whose names may hold `%token%` markers; both are
//! replaced with values the user supplies.

/// Command-line interface
pub mod cli;

/// Template catalog lookup
pub mod catalog;

/// Template descriptors (`tinpig.json`)
pub mod config;

pub mod constants;

/// Copies template trees into new projects
pub mod copier;

/// Error types and handling
pub mod error;

/// Project path resolution and `~` expansion
pub mod path;

/// The project creation pipeline
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Token substitution in contents and names
pub mod substitute;

/// Token value collection
pub mod tokens;
