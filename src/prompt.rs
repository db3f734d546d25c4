//! User input and interaction handling.

use crate::error::Result;
use dialoguer::{theme::SimpleTheme, Input, Select};

/// Line-oriented interaction with the user.
pub trait Prompter {
    /// Asks for one line of text. An empty answer is allowed.
    fn input(&self, label: &str) -> Result<String>;

    /// Lets the user pick one of `items`, returning its index.
    fn select(&self, label: &str, items: &[String]) -> Result<usize>;

    /// Shows an informational line.
    fn message(&self, text: &str) {
        println!("{text}");
    }
}

/// Terminal prompter backed by dialoguer.
///
/// The simple theme renders an input as `label: `, matching the plain
/// readline style users of the tool expect.
pub struct DialoguerPrompter {
    theme: SimpleTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: SimpleTheme }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, label: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, label: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(label)
            .default(0)
            .items(items)
            .interact()?)
    }
}
