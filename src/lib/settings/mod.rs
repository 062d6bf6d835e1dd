//! The hxmlgen settings, persisted in between process as a JSON file

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::utils::{
    self,
    constants::{self, error_messages},
};

/// Standalone utility for load the settings file from `settings_dir`. The directory and a
/// file with the default settings are created when they don't exist yet
pub fn load(settings_dir: &Path) -> Result<Settings> {
    let settings_file_path = settings_dir.join(constants::SETTINGS_FILENAME);

    if !settings_file_path.exists() {
        log::debug!("Creating the default settings at {settings_file_path:?}");
        utils::fs::create_directory(settings_dir)?;
        save(settings_dir, &Settings::default())?;
    }

    utils::fs::load_and_deserialize(&settings_file_path)
        .with_context(|| error_messages::FAILURE_LOADING_SETTINGS)
}

/// Standalone utility for persist the settings to the file system
pub fn save(settings_dir: &Path, settings: &Settings) -> Result<()> {
    utils::fs::serialize_object_to_file(&settings_dir.join(constants::SETTINGS_FILENAME), settings)
        .with_context(|| error_messages::FAILURE_SAVING_SETTINGS)
}

/// The per user data directory of hxmlgen, following the conventions of each platform
pub fn default_settings_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", constants::HXMLGEN)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| eyre!(error_messages::NO_SETTINGS_DIR))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// The text that pre-fills the file name prompt
    pub prompt_default: String,
    pub last_generated: Option<GenerationRecord>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt_default: String::from(constants::DEFAULT_OUTPUT),
            last_generated: None,
        }
    }
}

impl Settings {
    pub fn record_generation(&mut self, path: &Path, target_build: &str) {
        self.last_generated = Some(GenerationRecord {
            path: path.to_path_buf(),
            target_build: target_build.to_string(),
            at: Utc::now(),
        });
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerationRecord {
    pub path: PathBuf,
    pub target_build: String,
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_the_default_settings() -> Result<()> {
        let temp = tempdir()?;
        let settings_dir = temp.path().join("nested").join("hxmlgen");

        let settings = load(&settings_dir)?;

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.prompt_default, "build.hxml");
        assert!(settings_dir.join(constants::SETTINGS_FILENAME).exists());
        Ok(())
    }

    #[test]
    fn test_saved_settings_are_loaded_back() -> Result<()> {
        let temp = tempdir()?;
        let mut settings = Settings {
            prompt_default: String::from("release.hxml"),
            ..Default::default()
        };
        settings.record_generation(Path::new("/proj/release.hxml"), "flash");

        save(temp.path(), &settings)?;

        assert_eq!(load(temp.path())?, settings);
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_their_defaults() -> Result<()> {
        let temp = tempdir()?;
        std::fs::write(temp.path().join(constants::SETTINGS_FILENAME), "{}")?;

        assert_eq!(load(temp.path())?, Settings::default());
        Ok(())
    }

    #[test]
    fn test_corrupt_settings_are_an_error() -> Result<()> {
        let temp = tempdir()?;
        std::fs::write(temp.path().join(constants::SETTINGS_FILENAME), "not json")?;

        assert!(load(temp.path()).is_err());
        Ok(())
    }
}
