//! The read only model of a user's project, mapped from its [`crate::config_file::HxProjectFile`]

pub mod arguments;
pub mod compiler;
pub mod movie;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use self::{compiler::CompilerModel, movie::MovieModel};

/// The projects known by hxmlgen. Only the [`ProjectKind::Supported`] ones are able
/// to derive build arguments, so the generation entry points are typed against
/// [`HaxeProject`] directly
#[derive(Debug, PartialEq, Eq)]
pub enum ProjectKind<'a> {
    Supported(HaxeProject<'a>),
    Other { name: Cow<'a, str>, kind: Cow<'a, str> },
}

impl<'a> ProjectKind<'a> {
    pub fn name(&self) -> &str {
        let name: &Cow<'a, str> = match self {
            ProjectKind::Supported(project) => &project.name,
            ProjectKind::Other { name, .. } => name,
        };
        name
    }

    pub fn as_supported(&self) -> Option<&HaxeProject<'a>> {
        match self {
            ProjectKind::Supported(project) => Some(project),
            ProjectKind::Other { .. } => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.as_supported().is_some()
    }
}

/// A Haxe project. Every relative path held here is relative to [`HaxeProject::directory`]
#[derive(Debug, PartialEq, Eq, Default)]
pub struct HaxeProject<'a> {
    pub name: Cow<'a, str>,
    pub directory: PathBuf,
    pub target_build: Option<Cow<'a, str>>,
    pub classpaths: Vec<Cow<'a, str>>,
    pub compile_targets: Vec<Cow<'a, str>>,
    pub compiler: CompilerModel<'a>,
    pub movie: MovieModel<'a>,
    pub raw_hxml: Option<Vec<Cow<'a, str>>>,
}

impl<'a> HaxeProject<'a> {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The label of the active build profile. Falls back to the name of the target platform
    pub fn target_build_label(&self) -> Cow<'_, str> {
        match self.target_build.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => Cow::Borrowed(label),
            _ => Cow::Borrowed(self.compiler.target.as_ref()),
        }
    }
}
