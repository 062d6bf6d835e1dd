//! Decides where the build file is written, before generating it

use std::path::{Path, PathBuf};

use crate::utils::constants::DEFAULT_OUTPUT;

/// The outcome of asking the user for the file name of the build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    Confirmed(String),
    Cancelled,
}

/// Trims the user input and, when nothing is left, falls back to
/// `<project_directory>/build.hxml`. Otherwise the trimmed input is used verbatim, being it
/// relative or absolute
pub fn resolve_output_path(user_input: &str, project_directory: &Path) -> PathBuf {
    let output = user_input.trim();
    if output.is_empty() {
        project_directory.join(DEFAULT_OUTPUT)
    } else {
        PathBuf::from(output)
    }
}

/// [`None`] means that the user cancelled the prompt, so nothing must be generated
pub fn resolve_prompt(result: &PromptResult, project_directory: &Path) -> Option<PathBuf> {
    match result {
        PromptResult::Confirmed(input) => Some(resolve_output_path(input, project_directory)),
        PromptResult::Cancelled => None,
    }
}
