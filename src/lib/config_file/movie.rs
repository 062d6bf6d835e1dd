//! Flash movie settings. Ignored by every other target
use std::borrow::Cow;

use serde::*;

/// [`MovieAttribute`] - The properties of the generated `.swf`
///
/// ```rust
/// use hxmlgen::config_file::movie::MovieAttribute;
///
/// const PROJECT_FILE_MOCK: &str = r#"
///     #[movie]
///     version = '32.0'
///     fps = 60
///     background = '#1E1E1E'
///"#;
///
/// let config: MovieAttribute = toml::from_str(PROJECT_FILE_MOCK)
///    .expect("A failure happened parsing the project file");
///
/// assert_eq!(config.version.as_deref(), Some("32.0"));
/// assert_eq!(config.width, None);
/// assert_eq!(config.fps, Some(60));
/// assert_eq!(config.background.as_deref(), Some("#1E1E1E"));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MovieAttribute<'a> {
    #[serde(borrow)]
    pub version: Option<Cow<'a, str>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    #[serde(borrow)]
    pub background: Option<Cow<'a, str>>,
}
