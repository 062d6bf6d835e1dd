//! Process wide settings of the Haxe environment, shared by every project

use std::ffi::OsStr;

use crate::utils::constants::env_vars;

/// The search roots that every project receives on top of its own classpaths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalClasspaths(Vec<String>);

impl GlobalClasspaths {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(Into::into)
                .filter(|path: &String| !path.trim().is_empty())
                .collect(),
        )
    }

    /// Reads the global classpaths from the [`env_vars::GLOBAL_CLASSPATHS`] variable, which
    /// uses the path list syntax of the platform (`:` or `;` separated)
    pub fn from_env() -> Self {
        std::env::var_os(env_vars::GLOBAL_CLASSPATHS)
            .map(|raw| Self::from_path_list(&raw))
            .unwrap_or_default()
    }

    pub fn from_path_list(raw: &OsStr) -> Self {
        Self::new(
            std::env::split_paths(raw).map(|path| path.to_string_lossy().into_owned()),
        )
    }

    /// Appends the given paths after the ones already held, keeping their order
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(Self::new(extra).0);
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
