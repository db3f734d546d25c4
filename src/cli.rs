//! Command-line interface implementation for tinpig.
//! Provides argument parsing and the top-level command dispatch.

use crate::catalog::{templates_dir, TemplateCatalog};
use crate::config::Template;
use crate::constants::{prompts::CHOOSE_TEMPLATE, STDIN_INDICATOR, TEMPLATES_DIR_ENV};
use crate::error::{Error, Result};
use crate::path::home_dir;
use crate::project::ProjectMaker;
use crate::prompt::Prompter;
use crate::tokens::{get_answers_from, missing_answers};
use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;

/// Command-line arguments structure for tinpig.
#[derive(Parser, Debug)]
#[command(version, about = "tinpig: create projects from templates", long_about = None)]
pub struct Args {
    /// Name of the template to use. Chosen interactively when omitted
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Directory where the project will be created. Prompted for when omitted
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// List available templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Token values as a JSON object, or `-` to read them from stdin.
    /// Reading from stdin leaves nothing to prompt with, so it requires
    /// `--template`, `--path` and a value for every token
    #[arg(short, long, value_name = "JSON")]
    pub answers: Option<String>,

    /// Directory holding the templates
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command line arguments, exiting with clap's message on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Maps the `-v` count to a log level.
pub fn get_log_level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// One line of `--list` output.
pub fn format_template_line(template: &Template) -> String {
    match template.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => format!("{} - {}", template.name, description),
        None => template.name.clone(),
    }
}

fn choose_template(prompter: &dyn Prompter, catalog: &TemplateCatalog) -> Result<Template> {
    let templates = catalog.list()?;
    let no_templates = || Error::NoTemplates {
        templates_dir: catalog.root().display().to_string(),
    };
    if templates.is_empty() {
        return Err(no_templates());
    }
    let items: Vec<String> = templates.iter().map(format_template_line).collect();
    let index = prompter.select(CHOOSE_TEMPLATE, &items)?;
    templates.into_iter().nth(index).ok_or_else(no_templates)
}

/// Main application logic.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The created project path, or `None` when
///   only listing templates
pub fn run(args: Args, prompter: &dyn Prompter) -> Result<Option<PathBuf>> {
    let home = home_dir();
    let env_dir = std::env::var(TEMPLATES_DIR_ENV).ok();
    let root = templates_dir(args.templates_dir.as_deref(), env_dir.as_deref(), home.as_deref())?;
    debug!("Using templates from '{}'", root.display());
    let catalog = TemplateCatalog::new(root);

    if args.list {
        for template in catalog.list()? {
            prompter.message(&format_template_line(&template));
        }
        return Ok(None);
    }

    let answers_from_stdin = args.answers.as_deref() == Some(STDIN_INDICATOR);
    let path_given = args.path.as_deref().is_some_and(|p| !p.is_empty());
    if answers_from_stdin && (args.template.is_none() || !path_given) {
        return Err(Error::InvalidAnswers(
            "answers read from stdin require --template and --path".to_string(),
        ));
    }

    let template = match &args.template {
        Some(name) => catalog.find(name)?,
        None => choose_template(prompter, &catalog)?,
    };

    let answers = get_answers_from(args.answers.as_deref(), std::io::stdin())?;
    if answers_from_stdin {
        let missing = missing_answers(&template.tokens, &answers);
        if !missing.is_empty() {
            return Err(Error::InvalidAnswers(format!(
                "no value read from stdin for token(s) {}",
                missing.join(", ")
            )));
        }
    }
    let maker = ProjectMaker::new(prompter).with_home(home).with_answers(answers);
    let project_path = maker.make_project(args.path.as_deref(), &template)?;
    Ok(Some(project_path))
}
