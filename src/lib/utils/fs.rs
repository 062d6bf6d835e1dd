use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Creates (or truncates) the file at `file_path` and writes the whole buffer on it
pub fn write_file(file_path: &Path, buff_write: &[u8]) -> Result<()> {
    File::create(file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Returns the absolute, canonical form of the path where the user project lives
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = project_root
        .canonicalize()
        .with_context(|| format!("Could not canonicalize {project_root:?}"))?;
    Ok(strip_verbatim_prefix(canonical))
}

/// Joins relative paths with the current working directory, leaving absolute ones untouched
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()
            .with_context(|| "Could not read the current working directory")?
            .join(path))
    }
}

pub fn serialize_object_to_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(
        File::create(path).with_context(|| format!("Error opening file: {:?}", path))?,
        data,
    )
    .with_context(|| "Error serializing data to the file")
}

pub fn load_and_deserialize<T, P>(path: &P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path> + std::fmt::Debug + ?Sized,
{
    let buffer = std::io::BufReader::new(
        File::open(path.as_ref()).with_context(|| format!("Error opening {:?}", path))?,
    );

    serde_json::from_reader(buffer).with_context(|| format!("Unable to parse file: {:?}", path))
}

/// `canonicalize` returns `\\?\C:\...` paths on Windows, which the Haxe compiler does not
/// understand
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    if cfg!(target_os = "windows") {
        let raw = path.to_string_lossy();
        if let Some(stripped) = raw.strip_prefix(r"\\?\") {
            return PathBuf::from(stripped);
        }
    }
    path
}
