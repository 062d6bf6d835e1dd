//! Constant value definitions to use across the whole program

pub const HXMLGEN: &str = "hxmlgen";

/// The file name used when the user does not provide one
pub const DEFAULT_OUTPUT: &str = "build.hxml";

/// The first characters of the header line of every generated file
pub const HEADER_PREFIX: &str = "## ";

pub const PROJECT_FILE_NAME: &str = "hxproject";
pub const PROJECT_FILE_EXT: &str = "toml";
pub const SETTINGS_FILENAME: &str = "settings.json";

pub const LINE_ENDING: &str = if cfg!(target_os = "windows") {
    "\r\n"
} else {
    "\n"
};

/// Arguments that only make sense for the in-editor code analysis
pub mod sentinels {
    pub const NO_COMPILATION: &str = "-D no-compilation";
    pub const DISPLAY: &str = "-D display";
}

pub mod env_vars {
    pub const GLOBAL_CLASSPATHS: &str = "HAXE_GLOBAL_CLASSPATHS";
}

pub mod menu {
    pub const GENERATE_HXML: &str = "&Generate hxml build...";
    pub const CLOSE_PROJECT: &str = "Close Project";
    pub const PROMPT_TITLE: &str = "Generate hxml build file...";
    pub const PROMPT_LABEL: &str = "File name";
}

pub mod error_messages {
    pub const READ_PROJECT_FILE: &str = "Could not read the project file";
    pub const PARSE_PROJECT_FILE: &str = "Could not parse the project file";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_DERIVING_ARGUMENTS: &str =
        "The project could not derive its build arguments";
    pub const FAILURE_WRITING_BUILD_FILE: &str = "Failed to write the hxml build file";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const FAILURE_LOADING_SETTINGS: &str = "Failed to load the hxmlgen settings";
    pub const FAILURE_SAVING_SETTINGS: &str = "Error saving the hxmlgen settings";
    pub const NO_PROJECT_FILES: &str = "No project files found for the given root";
    pub const NO_SETTINGS_DIR: &str =
        "Unable to determine a data directory for the hxmlgen settings";
}
