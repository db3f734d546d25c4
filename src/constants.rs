//! Common constants used throughout tinpig.

/// Template descriptor file name, never copied into a project
pub const TEMPLATE_FILE: &str = "tinpig.json";

/// Environment variable overriding the templates directory
pub const TEMPLATES_DIR_ENV: &str = "TINPIG_TEMPLATES_DIR";

/// Templates directory relative to the home directory
pub const DEFAULT_TEMPLATES_DIR: &str = ".tinpig/templates";

/// Argument value meaning "read from stdin"
pub const STDIN_INDICATOR: &str = "-";

/// Prompt labels. The prompter renders them followed by ": ".
pub mod prompts {
    pub const PROJECT_DIRECTORY: &str = "Project directory";
    pub const CHOOSE_TEMPLATE: &str = "Choose a template";
    pub const TOKEN_INSTRUCTIONS: &str = "\nSupply values for each token in this template. \
        Press enter to accept default values (in parentheses).\n";
}
