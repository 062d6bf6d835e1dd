use core::fmt;
use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq, Default)]
pub struct CompilerModel<'a> {
    pub target: HaxeTarget,
    pub main_class: Option<Cow<'a, str>>,
    pub output: Option<Cow<'a, str>>,
    pub libraries: Vec<Cow<'a, str>>,
    pub defines: Vec<Cow<'a, str>>,
    pub additional: Vec<Cow<'a, str>>,
    pub debug: bool,
    pub flash_strict: bool,
}

impl<'a> CompilerModel<'a> {
    /// The main class, if any, ignoring blank declarations
    pub fn main_class(&self) -> Option<&str> {
        self.main_class
            .as_deref()
            .map(str::trim)
            .filter(|main| !main.is_empty())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum HaxeTarget {
    #[default]
    Flash,
    JavaScript,
    Neko,
    Php,
    Cpp,
    CSharp,
    Java,
    Python,
    HashLink,
    Lua,
    Interp,
}

impl HaxeTarget {
    /// The compiler flag that selects this target and receives the output path.
    /// [`HaxeTarget::Interp`] runs the program and has no output
    pub fn output_flag(&self) -> Option<&'static str> {
        match *self {
            HaxeTarget::Flash => Some("-swf"),
            HaxeTarget::JavaScript => Some("-js"),
            HaxeTarget::Neko => Some("-neko"),
            HaxeTarget::Php => Some("-php"),
            HaxeTarget::Cpp => Some("-cpp"),
            HaxeTarget::CSharp => Some("-cs"),
            HaxeTarget::Java => Some("-java"),
            HaxeTarget::Python => Some("-python"),
            HaxeTarget::HashLink => Some("-hl"),
            HaxeTarget::Lua => Some("-lua"),
            HaxeTarget::Interp => None,
        }
    }

    pub fn is_flash(&self) -> bool {
        matches!(self, HaxeTarget::Flash)
    }
}

impl fmt::Display for HaxeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for HaxeTarget {
    fn as_ref(&self) -> &str {
        match *self {
            HaxeTarget::Flash => "flash",
            HaxeTarget::JavaScript => "js",
            HaxeTarget::Neko => "neko",
            HaxeTarget::Php => "php",
            HaxeTarget::Cpp => "cpp",
            HaxeTarget::CSharp => "cs",
            HaxeTarget::Java => "java",
            HaxeTarget::Python => "python",
            HaxeTarget::HashLink => "hl",
            HaxeTarget::Lua => "lua",
            HaxeTarget::Interp => "interp",
        }
    }
}
