//! file that contains the configuration options available
//! within hxmlgen to override the derivation of the build arguments
use std::borrow::Cow;

use serde::*;

/// [`BuildAttribute`] - Stores build process specific configuration
///
/// * `raw_hxml` - A pre-generated list of compiler arguments (for example, the
/// output of a `display` run of a framework tool). When present, it is used verbatim
/// instead of deriving the arguments from the rest of the project file
///
/// ```rust
/// use hxmlgen::config_file::build::BuildAttribute;
///
/// const PROJECT_FILE_MOCK: &str = r#"
///     #[build]
///     raw_hxml = [ '-lib openfl', '-D display', '-swf bin/App.swf' ]
///"#;
///
/// let config: BuildAttribute = toml::from_str(PROJECT_FILE_MOCK)
///    .expect("A failure happened parsing the project file");
///
/// assert_eq!(config.raw_hxml.map(|raw| raw.len()), Some(3));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    pub raw_hxml: Option<Vec<Cow<'a, str>>>,
}
