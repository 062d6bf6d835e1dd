//! file for represent the available configuration properties within hxmlgen
//! for setting up the Haxe compiler
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::project_model;

/// [`CompilerAttribute`] - Configuration properties for
/// targeting the Haxe compiler
///
/// * `target` - The platform the project compiles to
/// * `main_class` - The class holding the entry point
/// * `output` - Where the compiler dumps the compiled program, relative to the project
/// file. Required for every target but `interp`
/// * `libraries` - Haxelib libraries used by the project
/// * `defines` - Conditional compilation flags
/// * `additional` - Free form compiler options, one per entry. Entries starting with `#`
/// are comments
/// * `debug` - Compiles with debug information
/// * `flash_strict` - More type strict flash API (Flash target only)
///
/// ### Tests
///
/// ```rust
/// use hxmlgen::config_file::compiler::{CompilerAttribute, TargetPlatform};
///
/// const PROJECT_FILE_MOCK: &str = r#"
///     #[compiler]
///     target = 'js'
///     main_class = 'app.Main'
///     output = 'bin/app.js'
///     libraries = [ 'tink_core' ]
///     additional = [ '--dce full' ]
///     debug = true
///"#;
///
/// let config: CompilerAttribute = toml::from_str(PROJECT_FILE_MOCK)
///    .expect("A failure happened parsing the project file");
///
/// assert_eq!(config.target, TargetPlatform::Js);
/// assert_eq!(config.main_class.as_deref(), Some("app.Main"));
/// assert_eq!(config.output.as_deref(), Some("bin/app.js"));
/// assert_eq!(config.debug, Some(true));
/// assert_eq!(config.flash_strict, None);
/// assert!(config.defines.is_none());
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the project file.
///
/// For a test over a real example, please look at the
/// [`hxmlgen::config_file::HxProjectFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CompilerAttribute<'a> {
    #[serde(default)]
    pub target: TargetPlatform,
    #[serde(borrow)]
    pub main_class: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub output: Option<Cow<'a, str>>,
    pub libraries: Option<Vec<Cow<'a, str>>>,
    pub defines: Option<Vec<Cow<'a, str>>>,
    pub additional: Option<Vec<Cow<'a, str>>>,
    pub debug: Option<bool>,
    pub flash_strict: Option<bool>,
}

/// The platforms the Haxe compiler is able to target
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    #[default]
    Flash,
    Js,
    Neko,
    Php,
    Cpp,
    Cs,
    Java,
    Python,
    Hl,
    Lua,
    Interp,
}

impl From<TargetPlatform> for project_model::compiler::HaxeTarget {
    fn from(value: TargetPlatform) -> Self {
        use project_model::compiler::HaxeTarget;
        match value {
            TargetPlatform::Flash => HaxeTarget::Flash,
            TargetPlatform::Js => HaxeTarget::JavaScript,
            TargetPlatform::Neko => HaxeTarget::Neko,
            TargetPlatform::Php => HaxeTarget::Php,
            TargetPlatform::Cpp => HaxeTarget::Cpp,
            TargetPlatform::Cs => HaxeTarget::CSharp,
            TargetPlatform::Java => HaxeTarget::Java,
            TargetPlatform::Python => HaxeTarget::Python,
            TargetPlatform::Hl => HaxeTarget::HashLink,
            TargetPlatform::Lua => HaxeTarget::Lua,
            TargetPlatform::Interp => HaxeTarget::Interp,
        }
    }
}
