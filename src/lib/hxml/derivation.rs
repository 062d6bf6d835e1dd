//! Derivation of the raw hxml arguments of a project.
//!
//! The arguments produced here are not yet suitable for being written to a build file:
//! they may hold blank entries and the placeholder flags used by the in-editor code
//! analysis. See [`crate::hxml::filter_build_arguments`]

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};

use crate::{
    project_model::{arguments::Arguments, HaxeProject},
    utils::{self, constants::sentinels},
};

/// Anything able to produce the raw compiler arguments of a build, together with the
/// label of the build profile those arguments belong to
pub trait BuildHxml {
    /// Derives the ordered raw arguments.
    ///
    /// * `global_classpaths` - extra search roots, placed before the project ones
    /// * `output` - the path of the hxml file that will hold the arguments
    /// * `no_compilation` - requests the arguments for a build that must not compile
    /// anything, so the derivation adds its placeholder flag
    fn build_hxml(
        &self,
        global_classpaths: &[String],
        output: &Path,
        no_compilation: bool,
    ) -> Result<Arguments>;

    fn target_build(&self) -> Cow<'_, str>;
}

impl<'a> BuildHxml for HaxeProject<'a> {
    fn build_hxml(
        &self,
        global_classpaths: &[String],
        output: &Path,
        no_compilation: bool,
    ) -> Result<Arguments> {
        self.ensure_single_line_entries()?;

        if let Some(raw) = self.raw_hxml.as_ref() {
            log::debug!("Using the raw hxml arguments declared by: {}", self.name);
            return Ok(raw.iter().map(|line| line.to_string()).collect());
        }

        let project_dir = utils::fs::absolutize(&self.directory)?;
        let build_file_dir = build_file_directory(output)?;
        let rebase = |path: &str| rebase_path(&project_dir, &build_file_dir, path);

        let compiler = &self.compiler;
        let mut args = Arguments::default();

        if compiler.debug {
            args.push("-debug");
        }

        for lib in non_blank(&compiler.libraries) {
            if lib.starts_with("-lib") {
                args.push(lib);
            } else {
                args.push(format!("-lib {lib}"));
            }
        }

        for cp in non_blank(global_classpaths) {
            args.push(format!("-cp {}", quote(&normalize_separators(cp))));
        }
        for cp in non_blank(&self.classpaths) {
            args.push(format!("-cp {}", quote(&rebase(cp))));
        }

        if compiler.target.is_flash() {
            let movie = &self.movie;
            args.push(format!("-swf-version {}", movie.version.trim()));
            args.push(format!(
                "-swf-header {}:{}:{}:{}",
                movie.width,
                movie.height,
                movie.fps,
                background_color(&movie.background)?
            ));
            if compiler.flash_strict {
                args.push("--flash-strict");
            }
        }

        for define in non_blank(&compiler.defines) {
            args.push(format!("-D {define}"));
        }
        if no_compilation {
            args.push(sentinels::NO_COMPILATION);
        }

        let main_class = compiler.main_class();
        for target in non_blank(&self.compile_targets) {
            let class_name = self.class_name_of(&project_dir, global_classpaths, target)?;
            if Some(class_name.as_str()) != main_class {
                args.push(class_name);
            }
        }
        if let Some(main) = main_class {
            args.push(format!("-main {main}"));
        }

        args.extend(non_blank(&compiler.additional).filter_map(additional_option));

        match compiler.target.output_flag() {
            Some(flag) => {
                let compile_output = compiler
                    .output
                    .as_deref()
                    .map(str::trim)
                    .filter(|out| !out.is_empty())
                    .ok_or_else(|| {
                        eyre!(
                            "The project {} targets {} but declares no compile output",
                            self.name,
                            compiler.target
                        )
                    })?;
                args.push(format!("{flag} {}", quote(&rebase(compile_output))));
            }
            None => args.push("--interp"),
        }

        Ok(args)
    }

    fn target_build(&self) -> Cow<'_, str> {
        self.target_build_label()
    }
}

impl<'a> HaxeProject<'a> {
    /// Every entry becomes a line of the build file, so none may hold a line break
    fn ensure_single_line_entries(&self) -> Result<()> {
        let compiler = &self.compiler;
        let multiline = self
            .raw_hxml
            .iter()
            .flatten()
            .chain(&self.classpaths)
            .chain(&self.compile_targets)
            .chain(&compiler.libraries)
            .chain(&compiler.defines)
            .chain(&compiler.additional)
            .chain(compiler.main_class.iter())
            .chain(compiler.output.iter())
            .find(|entry| entry.contains(|c: char| c == '\n' || c == '\r'));

        if let Some(entry) = multiline {
            bail!(
                "The project {} declares an entry spanning several lines: {entry:?}",
                self.name
            );
        }
        Ok(())
    }

    /// Guesses the fully qualified class name of a source file from the innermost classpath
    /// that contains it
    fn class_name_of(
        &self,
        project_dir: &Path,
        global_classpaths: &[String],
        source: &str,
    ) -> Result<String> {
        let source_path = project_dir.join(normalize_separators(source));

        let innermost = non_blank(global_classpaths)
            .chain(non_blank(&self.classpaths))
            .map(|cp| project_dir.join(normalize_separators(cp)))
            .filter_map(|classpath| {
                let relative = source_path.strip_prefix(&classpath).ok()?;
                Some((classpath.components().count(), relative.with_extension("")))
            })
            .filter(|(_, relative)| relative.components().next().is_some())
            .max_by_key(|(depth, _)| *depth);

        match innermost {
            Some((_, relative)) => Ok(relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(".")),
            None => bail!(
                "The always compiled file {source} of the project {} is not under any classpath",
                self.name
            ),
        }
    }
}

fn non_blank<S: AsRef<str>>(values: &[S]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !value.is_empty())
}

/// The directory where the hxml file lives, since the compiler resolves every relative path
/// against it
fn build_file_directory(output: &Path) -> Result<PathBuf> {
    let output = utils::fs::absolutize(output)
        .with_context(|| format!("Could not resolve the directory of {output:?}"))?;
    Ok(output
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(output))
}

fn rebase_path(project_dir: &Path, build_file_dir: &Path, path: &str) -> String {
    let absolute = project_dir.join(normalize_separators(path));
    match pathdiff::diff_paths(&absolute, build_file_dir) {
        Some(relative) if relative.as_os_str().is_empty() => String::from("."),
        Some(relative) => normalize_separators(&relative.to_string_lossy()),
        None => normalize_separators(&absolute.to_string_lossy()),
    }
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Values already wrapped in double quotes are left as they are
fn quote(value: &str) -> String {
    let quoted = value.len() > 1 && value.starts_with('"') && value.ends_with('"');
    if value.contains(' ') && !quoted {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// `flag value` options get their value quoted. Comments (`#`) are skipped
fn additional_option(option: &str) -> Option<String> {
    if option.starts_with('#') {
        return None;
    }
    match option.split_once(' ') {
        Some((flag, value)) => Some(format!("{flag} {}", quote(value.trim()))),
        None => Some(option.to_string()),
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB` or `RRGGBB` and prints it as the `-swf-header` expects
fn background_color(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let hex = raw
        .strip_prefix('#')
        .or_else(|| raw.strip_prefix("0x"))
        .unwrap_or(raw);

    let color = u32::from_str_radix(hex, 16)
        .with_context(|| format!("Invalid background color: {raw}"))?;
    if color > 0xFF_FF_FF {
        bail!("The background color {raw} does not fit in 24 bits");
    }

    Ok(format!("{color:06X}"))
}
