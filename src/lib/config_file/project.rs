//! Metadata about the user's project
use std::borrow::Cow;

use serde::*;

/// [`ProjectAttribute`] - Metadata about the user's project
/// * `name` - The project's name
/// * `kind` - The toolchain the project is meant for. Only `haxe` projects
/// are able to generate build files. Defaults to `haxe`
/// * `target_build` - The label of the active build profile. When missing, the name
/// of the target platform is used
/// * `classpaths` - The source roots of the project, relative to the project file
/// * `compile_targets` - Source files that must always be compiled, even when the main
/// class does not reference them
///
/// ### Tests
///
/// ```rust
/// use hxmlgen::config_file::project::ProjectAttribute;
///
/// const PROJECT_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'Calculator'
///     kind = 'haxe'
///     target_build = 'html5'
///     classpaths = [ 'src' ]
///     compile_targets = [ 'src/tools/Extra.hx' ]
///"#;
///
/// let config: ProjectAttribute = toml::from_str(PROJECT_FILE_MOCK)
///    .expect("A failure happened parsing the project file");
///
/// assert_eq!(config.name, "Calculator");
/// assert_eq!(config.kind.as_deref(), Some("haxe"));
/// assert_eq!(config.target_build.as_deref(), Some("html5"));
/// assert_eq!(config.classpaths.unwrap().len(), 1);
/// assert_eq!(config.compile_targets.unwrap()[0], "src/tools/Extra.hx");
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the project file.
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub kind: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub target_build: Option<Cow<'a, str>>,
    pub classpaths: Option<Vec<Cow<'a, str>>>,
    pub compile_targets: Option<Vec<Cow<'a, str>>>,
}
