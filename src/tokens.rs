//! Token value collection.

use crate::config::Token;
use crate::constants::{prompts::TOKEN_INSTRUCTIONS, STDIN_INDICATOR};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::debug;
use std::io::Read;

/// Resolved token values, in the order the template declares them.
pub type TokenSet = IndexMap<String, String>;

/// Builds the label shown for `token`, e.g. `- projectName (myapp)`.
pub fn token_label(token: &Token) -> String {
    match &token.default {
        Some(default) if !default.is_empty() => format!("- {} ({})", token.name, default),
        _ => format!("- {}", token.name),
    }
}

/// Picks the value for `token` from a raw answer.
///
/// An empty answer falls back to the default, and a token without a
/// default resolves to the empty string.
pub fn value_or_default(token: &Token, answer: &str) -> String {
    if answer.is_empty() {
        token.default.clone().unwrap_or_default()
    } else {
        answer.to_string()
    }
}

/// Collects a value for each token in declaration order.
///
/// Tokens found in `preloaded` are not prompted for.
pub fn collect_tokens(
    prompter: &dyn Prompter,
    tokens: &[Token],
    preloaded: &serde_json::Map<String, serde_json::Value>,
) -> Result<TokenSet> {
    let mut values = TokenSet::new();
    let mut instructed = false;

    for token in tokens {
        let answer = match preloaded.get(&token.name) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) => String::new(),
            Some(other) => other.to_string(),
            None => {
                if !instructed {
                    prompter.message(TOKEN_INSTRUCTIONS);
                    instructed = true;
                }
                prompter.input(&token_label(token))?
            }
        };
        let value = value_or_default(token, &answer);
        debug!("Token '{}' resolved to '{}'", token.name, value);
        values.insert(token.name.clone(), value);
    }

    Ok(values)
}

/// Parses preloaded answers given as a JSON object.
pub fn parse_answers(content: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Map::new());
    }
    match serde_json::from_str(content) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::InvalidAnswers("expected a JSON object".to_string())),
        Err(e) => Err(Error::InvalidAnswers(e.to_string())),
    }
}

/// Reads preloaded answers from a CLI argument, or from `reader` when the
/// argument is `-`.
pub fn get_answers_from(
    arg: Option<&str>,
    mut reader: impl Read,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match arg {
        None => Ok(serde_json::Map::new()),
        Some(STDIN_INDICATOR) => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            parse_answers(&buf)
        }
        Some(json) => parse_answers(json),
    }
}

/// Names of the tokens in `tokens` that have no entry in `answers`.
pub fn missing_answers<'a>(
    tokens: &'a [Token],
    answers: &serde_json::Map<String, serde_json::Value>,
) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|token| !answers.contains_key(&token.name))
        .map(|token| token.name.as_str())
        .collect()
}
