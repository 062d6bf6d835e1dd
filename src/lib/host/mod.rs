//! The surface offered to an editor that embeds hxmlgen.
//!
//! The editor notifies the project activations and the selection changes of its project
//! tree, and receives back the [`GenerateHxmlCommand`] to offer in the context menu when the
//! selected node is the root of a Haxe project. Everything the command needs travels
//! explicitly with it, so there is no shared state between notifications.

use std::path::PathBuf;

use color_eyre::Result;

use crate::{
    environment::GlobalClasspaths,
    hxml::{
        self,
        derivation::BuildHxml,
        output_path::{resolve_prompt, PromptResult},
    },
    project_model::{HaxeProject, ProjectKind},
    utils::constants::{menu, DEFAULT_OUTPUT},
};

/// The kind of node selected in the project tree of the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    ProjectNode,
    DirectoryNode(PathBuf),
    FileNode(PathBuf),
    Nothing,
}

/// Whether the selections of the activated project deserve to be tracked at all
pub fn on_project_activated(project: &ProjectKind<'_>) -> bool {
    let tracked = project.is_supported();
    log::debug!("Project activated: {} (tracked: {tracked})", project.name());
    tracked
}

/// Offers the generation command only for the root node of a supported project
pub fn on_selection_changed<'p, 'a>(
    project: &'p ProjectKind<'a>,
    selection: &Selection,
    prompt_default: &str,
) -> Option<GenerateHxmlCommand<'p, 'a>> {
    match (project, selection) {
        (ProjectKind::Supported(haxe_project), Selection::ProjectNode) => {
            Some(GenerateHxmlCommand::new(haxe_project, prompt_default))
        }
        _ => None,
    }
}

/// What the editor must show when asking for the name of the build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub label: &'static str,
    pub default_text: String,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            title: menu::PROMPT_TITLE,
            label: menu::PROMPT_LABEL,
            default_text: String::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug)]
pub struct GenerateHxmlCommand<'p, 'a> {
    project: &'p HaxeProject<'a>,
    prompt: Prompt,
}

impl<'p, 'a> GenerateHxmlCommand<'p, 'a> {
    pub fn new(project: &'p HaxeProject<'a>, prompt_default: &str) -> Self {
        Self {
            project,
            prompt: Prompt {
                default_text: prompt_default.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn label(&self) -> &'static str {
        menu::GENERATE_HXML
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Generates the build file once the user answered the [`Prompt`]. Returns the path of
    /// the generated file, or [`None`] when the user cancelled
    pub fn execute(
        &self,
        answer: PromptResult,
        global_classpaths: &GlobalClasspaths,
    ) -> Result<Option<PathBuf>> {
        let Some(output) = resolve_prompt(&answer, self.project.directory()) else {
            log::debug!("Generation of the hxml build file cancelled by the user");
            return Ok(None);
        };

        hxml::generate_build_file(self.project, global_classpaths, &output)?;
        Ok(Some(output))
    }

    pub fn target_build(&self) -> String {
        self.project.target_build().into_owned()
    }
}

/// The ordered entries of the context menu of a project node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    entries: Vec<String>,
}

impl ContextMenu {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Places the command right after the `Close Project` entry, or at the end of the menu
    /// when that entry is missing. A menu never holds the command twice
    pub fn insert_command(&mut self, command: &GenerateHxmlCommand<'_, '_>) {
        let label = command.label();
        if self.entries.iter().any(|entry| entry == label) {
            return;
        }

        match self
            .entries
            .iter()
            .position(|entry| entry == menu::CLOSE_PROJECT)
        {
            Some(anchor) => self.entries.insert(anchor + 1, label.to_string()),
            None => self.entries.push(label.to_string()),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
