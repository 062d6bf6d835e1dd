//! root file for the crate where the datastructures that holds the TOML
//! parsed data of a Haxe project file lives.
pub mod build;
pub mod compiler;
pub mod movie;
pub mod project;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use self::{
    build::BuildAttribute, compiler::CompilerAttribute, movie::MovieAttribute,
    project::ProjectAttribute,
};

/// ```rust
/// use hxmlgen::config_file::{
///     HxProjectFile,
///     compiler::TargetPlatform,
/// };
///
/// const PROJECT_FILE_MOCK: &str = r#"
///     [project]
///     name = 'hxmlgen serde tests'
///     classpaths = [ 'src', 'vendor/src' ]
///
///     [compiler]
///     target = 'flash'
///     main_class = 'Main'
///     output = 'bin/Main.swf'
///     libraries = [ 'actuate' ]
///     defines = [ 'analyzer-optimize' ]
///
///     [movie]
///     version = '11.4'
///     width = 800
///     height = 600
///     fps = 30
///     background = '#FFFFFF'
/// "#;
///
/// let config: HxProjectFile = toml::from_str(PROJECT_FILE_MOCK)
///     .expect("A failure happened parsing the project file");
///
/// assert_eq!(config.project.name, "hxmlgen serde tests");
/// assert_eq!(config.compiler.target, TargetPlatform::Flash);
/// assert_eq!(config.compiler.main_class.as_deref(), Some("Main"));
///
/// let movie = config.movie.expect("The [movie] table must be present");
/// assert_eq!(movie.fps, Some(30));
/// assert!(config.build.is_none());
/// ```
/// The [`HxProjectFile`] is the type that holds
/// the whole hierarchy of the project file attributes
/// and properties
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct HxProjectFile<'a> {
    #[serde(borrow)]
    pub project: ProjectAttribute<'a>,
    #[serde(borrow, default)]
    pub compiler: CompilerAttribute<'a>,
    #[serde(borrow)]
    pub movie: Option<MovieAttribute<'a>>,
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
}

pub fn hx_project_from_file(cfg: &'_ str) -> Result<HxProjectFile<'_>, toml::de::Error> {
    toml::from_str(cfg)
}
