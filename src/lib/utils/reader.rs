use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::eyre, Result};
use walkdir::WalkDir;

use crate::{
    config_file::{
        build::BuildAttribute, compiler::CompilerAttribute, movie::MovieAttribute,
        project::ProjectAttribute, HxProjectFile,
    },
    project_model::{compiler::CompilerModel, movie::MovieModel, HaxeProject, ProjectKind},
    utils::constants::{error_messages, PROJECT_FILE_EXT, PROJECT_FILE_NAME},
};

/// The project kind assumed when the `[project]` table doesn't declare one
pub const HAXE_PROJECT_KIND: &str = "haxe";

/// Details about a found project file
///
/// This is just a project file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ProjectFile {
    pub path: PathBuf,
}

impl ProjectFile {
    /// The folder that contains the project file, which is the project directory
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Checks for the existence of the `hxproject<any>.toml` files under `base_path`, looking
/// up to two levels deep, and returns the ones found sorted by path.
///
/// *filename_match* - An optional fragment that the file name must contain
///
/// This function fails if there's no project file
pub fn find_project_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ProjectFile>> {
    log::debug!("Searching for hxmlgen project files under {base_path:?}...");

    let mut files: Vec<ProjectFile> = WalkDir::new(base_path)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let Some(filename) = e.file_name().to_str() else {
                return false;
            };
            filename.starts_with(PROJECT_FILE_NAME)
                && Path::new(filename)
                    .extension()
                    .map_or(false, |ext| ext == PROJECT_FILE_EXT)
                && filename_match
                    .as_deref()
                    .map_or(true, |fm| filename.contains(fm))
        })
        .map(|e| ProjectFile {
            path: e.into_path(),
        })
        .collect();

    if files.is_empty() {
        return Err(eyre!(error_messages::NO_PROJECT_FILES));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Maps a parsed project file to the [`ProjectKind`] that it describes.
///
/// *project_dir* - the absolute path of the directory that holds the project file
pub fn build_model<'a>(config: HxProjectFile<'a>, project_dir: &Path) -> Result<ProjectKind<'a>> {
    let HxProjectFile {
        project,
        compiler,
        movie,
        build,
    } = config;

    let kind = project
        .kind
        .clone()
        .unwrap_or(Cow::Borrowed(HAXE_PROJECT_KIND));
    if !kind.trim().eq_ignore_ascii_case(HAXE_PROJECT_KIND) {
        log::debug!("The project {} is of kind {kind}", project.name);
        return Ok(ProjectKind::Other {
            name: project.name,
            kind,
        });
    }

    Ok(ProjectKind::Supported(assemble_haxe_project(
        project,
        compiler,
        movie,
        build,
        project_dir,
    )))
}

fn assemble_haxe_project<'a>(
    project: ProjectAttribute<'a>,
    compiler: CompilerAttribute<'a>,
    movie: Option<MovieAttribute<'a>>,
    build: Option<BuildAttribute<'a>>,
    project_dir: &Path,
) -> HaxeProject<'a> {
    HaxeProject {
        name: project.name,
        directory: project_dir.to_path_buf(),
        target_build: project.target_build,
        classpaths: project.classpaths.unwrap_or_default(),
        compile_targets: project.compile_targets.unwrap_or_default(),
        compiler: assemble_compiler_model(compiler),
        movie: assemble_movie_model(movie),
        raw_hxml: build.and_then(|build| build.raw_hxml),
    }
}

fn assemble_compiler_model(config: CompilerAttribute<'_>) -> CompilerModel<'_> {
    CompilerModel {
        target: config.target.into(),
        main_class: config.main_class,
        output: config.output,
        libraries: config.libraries.unwrap_or_default(),
        defines: config.defines.unwrap_or_default(),
        additional: config.additional.unwrap_or_default(),
        debug: config.debug.unwrap_or_default(),
        flash_strict: config.flash_strict.unwrap_or_default(),
    }
}

fn assemble_movie_model(config: Option<MovieAttribute<'_>>) -> MovieModel<'_> {
    let defaults = MovieModel::default();
    let Some(movie) = config else {
        return defaults;
    };

    MovieModel {
        version: movie.version.unwrap_or(defaults.version),
        width: movie.width.unwrap_or(defaults.width),
        height: movie.height.unwrap_or(defaults.height),
        fps: movie.fps.unwrap_or(defaults.fps),
        background: movie.background.unwrap_or(defaults.background),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config_file, project_model::compiler::HaxeTarget};
    use tempfile::tempdir;

    const CONFIG_FILE_MOCK: &str = r#"
        [project]
        name = 'calculator'
        target_build = 'release'
        classpaths = [ 'src' ]
        compile_targets = [ 'src/Main.hx' ]

        [compiler]
        target = 'js'
        main_class = 'Main'
        output = 'bin/calculator.js'
        defines = [ 'analyzer-optimize' ]
        debug = true
    "#;

    #[test]
    fn test_project_model_with_defaults() -> Result<()> {
        let config = config_file::hx_project_from_file(CONFIG_FILE_MOCK)?;
        let model = build_model(config, Path::new("/proj"))?;

        let expected = ProjectKind::Supported(HaxeProject {
            name: Cow::Borrowed("calculator"),
            directory: PathBuf::from("/proj"),
            target_build: Some(Cow::Borrowed("release")),
            classpaths: vec![Cow::Borrowed("src")],
            compile_targets: vec![Cow::Borrowed("src/Main.hx")],
            compiler: CompilerModel {
                target: HaxeTarget::JavaScript,
                main_class: Some(Cow::Borrowed("Main")),
                output: Some(Cow::Borrowed("bin/calculator.js")),
                libraries: vec![],
                defines: vec![Cow::Borrowed("analyzer-optimize")],
                additional: vec![],
                debug: true,
                flash_strict: false,
            },
            movie: MovieModel::default(),
            raw_hxml: None,
        });

        assert_eq!(model, expected);
        Ok(())
    }

    #[test]
    fn test_partial_movie_table_is_completed_with_defaults() -> Result<()> {
        let config = config_file::hx_project_from_file(
            r#"
            [project]
            name = 'game'

            [compiler]
            output = 'bin/game.swf'

            [movie]
            fps = 60
            "#,
        )?;
        let model = build_model(config, Path::new("/proj"))?;
        let project = model.as_supported().expect("Haxe is the default kind");

        assert_eq!(project.compiler.target, HaxeTarget::Flash);
        assert_eq!(project.movie.fps, 60);
        assert_eq!(project.movie.width, 800);
        assert_eq!(project.movie.version, "11.4");
        Ok(())
    }

    #[test]
    fn test_other_kinds_are_not_supported() -> Result<()> {
        let config = config_file::hx_project_from_file(
            r#"
            [project]
            name = 'legacy'
            kind = 'as3'

            [compiler]
            "#,
        )?;

        let model = build_model(config, Path::new("/proj"))?;

        assert!(!model.is_supported());
        assert_eq!(model.name(), "legacy");
        Ok(())
    }

    #[test]
    fn test_find_project_files() -> Result<()> {
        let temp = tempdir()?;
        std::fs::create_dir_all(temp.path().join("game").join("deeper").join("ignored"))?;
        std::fs::write(temp.path().join("hxproject.toml"), "")?;
        std::fs::write(temp.path().join("game").join("hxproject_game.toml"), "")?;
        std::fs::write(temp.path().join("game").join("hxproject.json"), "")?;
        std::fs::write(temp.path().join("game").join("other.toml"), "")?;
        std::fs::write(
            temp.path()
                .join("game")
                .join("deeper")
                .join("ignored")
                .join("hxproject.toml"),
            "",
        )?;

        let found = find_project_files(temp.path(), &None)?;
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].directory(), temp.path().join("game"));
        assert_eq!(found[1].path, temp.path().join("hxproject.toml"));

        let found = find_project_files(temp.path(), &Some(String::from("game")))?;
        assert_eq!(found.len(), 1);

        assert!(find_project_files(temp.path(), &Some(String::from("nope"))).is_err());
        Ok(())
    }
}
