#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tinpig::error::{Error, Result};
use tinpig::prompt::Prompter;

/// Prompter answering from a fixed script and recording what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    selections: RefCell<VecDeque<usize>>,
    pub labels: RefCell<Vec<String>>,
    pub messages: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn with_selections(self, selections: &[usize]) -> Self {
        *self.selections.borrow_mut() = selections.iter().copied().collect();
        self
    }

    pub fn labels(&self) -> Vec<String> {
        self.labels.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, label: &str) -> Result<String> {
        self.labels.borrow_mut().push(label.to_string());
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            Error::IoError(std::io::Error::new(
                std::io::ErrorKind::Interrupted,
                "no scripted answer left",
            ))
        })
    }

    fn select(&self, label: &str, _items: &[String]) -> Result<usize> {
        self.labels.borrow_mut().push(label.to_string());
        Ok(self.selections.borrow_mut().pop_front().unwrap_or(0))
    }

    fn message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}

/// Writes `files` (relative path, content) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Lists every file under `root` as a sorted, `/`-separated relative path.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}
