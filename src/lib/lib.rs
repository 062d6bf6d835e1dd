pub mod cli;
pub mod config_file;
pub mod environment;
pub mod host;
pub mod hxml;
pub mod project_model;
pub mod settings;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::{
        fs,
        path::{Path, PathBuf},
    };

    use color_eyre::{
        eyre::{bail, Context},
        Result,
    };

    use crate::{
        cli::input::{CliArgs, Command},
        config_file::{self, HxProjectFile},
        environment::GlobalClasspaths,
        host::{on_project_activated, on_selection_changed, Selection},
        hxml::{self, output_path::PromptResult},
        project_model::{HaxeProject, ProjectKind},
        settings::{self, Settings},
        utils::{
            self,
            constants::{error_messages, DEFAULT_OUTPUT},
            reader::{build_model, find_project_files, ProjectFile},
        },
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI
    pub fn run_hxmlgen(cli_args: &CliArgs, path: &Path) -> Result<()> {
        let project_root = cli_args.root.as_deref().map(Path::new).unwrap_or(path);
        let abs_project_root = utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)?;

        let project_files: Vec<ProjectFile> =
            find_project_files(&abs_project_root, &cli_args.match_files)?;

        let global_classpaths =
            GlobalClasspaths::from_env().with_extra(cli_args.command.global_cp().iter().cloned());
        log::debug!("Global classpaths: {:?}", global_classpaths.as_slice());

        match &cli_args.command {
            Command::Generate { output, .. } => {
                if output.is_some() && project_files.len() > 1 {
                    bail!(
                        "--output names a single build file but {} project files were found, \
                        narrow them down with --match-files",
                        project_files.len()
                    );
                }

                let settings_dir = settings_directory(cli_args)?;
                let mut settings = settings::load(&settings_dir)?;

                let work_result = generate_all(
                    &project_files,
                    output.as_deref(),
                    &global_classpaths,
                    &mut settings,
                );

                settings::save(&settings_dir, &settings)?;
                work_result
            }
            Command::Print { .. } => print_all(&project_files, &global_classpaths),
        }
    }

    fn generate_all(
        project_files: &[ProjectFile],
        output: Option<&str>,
        global_classpaths: &GlobalClasspaths,
        settings: &mut Settings,
    ) -> Result<()> {
        for project_file in project_files {
            let raw_file = read_project_file(project_file)?;
            let config = parse_project_file(&raw_file, project_file)?;
            let model = load_project_model(config, project_file)?;

            if !on_project_activated(&model) {
                skip(&model, project_file);
                continue;
            }

            let Some(command) =
                on_selection_changed(&model, &Selection::ProjectNode, &settings.prompt_default)
            else {
                continue;
            };

            let answer = PromptResult::Confirmed(output.unwrap_or_default().to_string());
            if let Some(generated) = command
                .execute(answer, global_classpaths)
                .with_context(|| format!("Failed to complete the job for: {:?}", project_file.path))?
            {
                settings.record_generation(&generated, &command.target_build());
            }
        }

        Ok(())
    }

    fn print_all(project_files: &[ProjectFile], global_classpaths: &GlobalClasspaths) -> Result<()> {
        for project_file in project_files {
            let raw_file = read_project_file(project_file)?;
            let config = parse_project_file(&raw_file, project_file)?;
            let model = load_project_model(config, project_file)?;

            match model.as_supported() {
                Some(project) => print!("{}", render_for_print(project, global_classpaths)?),
                None => skip(&model, project_file),
            }
        }

        Ok(())
    }

    /// The printed content is rendered as if it were written at the default location
    fn render_for_print(
        project: &HaxeProject<'_>,
        global_classpaths: &GlobalClasspaths,
    ) -> Result<String> {
        let output: PathBuf = project.directory().join(DEFAULT_OUTPUT);
        hxml::render_project(project, global_classpaths, &output)
    }

    fn skip(model: &ProjectKind<'_>, project_file: &ProjectFile) {
        log::warn!(
            "Skipping {:?}: the project {} is not a Haxe project",
            project_file.path,
            model.name()
        );
    }

    fn read_project_file(project_file: &ProjectFile) -> Result<String> {
        let path = &project_file.path;
        log::debug!("Launching an hxmlgen work event for the project file: {path:?}");
        fs::read_to_string(path)
            .with_context(|| format!("{}: {:?}", error_messages::READ_PROJECT_FILE, path))
    }

    fn parse_project_file<'a>(
        raw_file: &'a str,
        project_file: &ProjectFile,
    ) -> Result<HxProjectFile<'a>> {
        config_file::hx_project_from_file(raw_file).with_context(|| {
            format!(
                "{}: {:?}",
                error_messages::PARSE_PROJECT_FILE,
                project_file.path
            )
        })
    }

    fn load_project_model<'a>(
        config: HxProjectFile<'a>,
        project_file: &ProjectFile,
    ) -> Result<ProjectKind<'a>> {
        build_model(config, project_file.directory())
            .with_context(|| error_messages::PROJECT_MODEL_MAPPING)
    }

    fn settings_directory(cli_args: &CliArgs) -> Result<PathBuf> {
        match cli_args.settings_dir.as_deref() {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => settings::default_settings_dir(),
        }
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use super::*;

        const PROJECT_FILE: &str = r#"
            [project]
            name = 'calculator'
            target_build = 'debug'
            classpaths = [ 'src' ]

            [compiler]
            target = 'neko'
            main_class = 'Main'
            output = 'bin/calculator.n'
            defines = [ 'display' ]
        "#;

        #[test]
        fn test_generate_records_the_last_generation() -> Result<()> {
            let temp = tempdir()?;
            let settings_dir = temp.path().join("settings");
            fs::write(temp.path().join("hxproject.toml"), PROJECT_FILE)?;

            let cli_args = CliArgs::parse_from([
                "",
                "--settings-dir",
                settings_dir.to_str().expect("Temporary paths are UTF-8"),
                "generate",
            ]);
            run_hxmlgen(&cli_args, temp.path())?;

            let content = fs::read_to_string(temp.path().join("build.hxml"))?;
            assert!(content.starts_with("## debug"));
            assert!(content.contains("-cp src"));
            assert!(content.contains("-neko bin/calculator.n"));
            assert!(!content.contains("-D display"));
            assert!(!content.contains("-D no-compilation"));

            let settings = settings::load(&settings_dir)?;
            let record = settings
                .last_generated
                .expect("The generation must be recorded");
            assert_eq!(record.target_build, "debug");
            assert!(record.path.ends_with("build.hxml"));
            Ok(())
        }

        #[test]
        fn test_print_writes_nothing() -> Result<()> {
            let temp = tempdir()?;
            fs::write(temp.path().join("hxproject.toml"), PROJECT_FILE)?;

            run_hxmlgen(&CliArgs::parse_from(["", "print"]), temp.path())?;

            assert!(!temp.path().join("build.hxml").exists());
            Ok(())
        }

        #[test]
        fn test_single_output_for_several_projects_is_rejected() -> Result<()> {
            let temp = tempdir()?;
            let settings_dir = temp.path().join("settings");
            fs::write(temp.path().join("hxproject_a.toml"), PROJECT_FILE)?;
            fs::write(temp.path().join("hxproject_b.toml"), PROJECT_FILE)?;
            let output = temp.path().join("shared.hxml");

            let cli_args = CliArgs::parse_from([
                "",
                "--settings-dir",
                settings_dir.to_str().expect("Temporary paths are UTF-8"),
                "generate",
                "--output",
                output.to_str().expect("Temporary paths are UTF-8"),
            ]);

            assert!(run_hxmlgen(&cli_args, temp.path()).is_err());
            assert!(!output.exists());

            let cli_args = CliArgs::parse_from([
                "",
                "--match-files",
                "_a",
                "--settings-dir",
                settings_dir.to_str().expect("Temporary paths are UTF-8"),
                "generate",
                "--output",
                output.to_str().expect("Temporary paths are UTF-8"),
            ]);
            run_hxmlgen(&cli_args, temp.path())?;
            assert!(output.exists());
            Ok(())
        }

        #[test]
        fn test_missing_project_files_is_an_error() -> Result<()> {
            let temp = tempdir()?;
            assert!(run_hxmlgen(&CliArgs::parse_from(["", "print"]), temp.path()).is_err());
            Ok(())
        }
    }
}
