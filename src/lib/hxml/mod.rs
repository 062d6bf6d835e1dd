//! The hxml builder. Turns the raw arguments of a project into a build file that the Haxe
//! compiler is able to consume with `haxe build.hxml`

pub mod derivation;
pub mod output_path;

use std::path::Path;

use color_eyre::{eyre::Context, Result};

use crate::{
    environment::GlobalClasspaths,
    utils::{
        self,
        constants::{error_messages, sentinels, HEADER_PREFIX, LINE_ENDING},
    },
};

use self::derivation::BuildHxml;

/// Generates the build file of `project` at `output`.
///
/// The arguments are fully derived before the target file is touched, so a failing
/// derivation never leaves a truncated build file behind. An existing file is replaced
/// as a whole.
pub fn generate_build_file<P>(
    project: &P,
    global_classpaths: &GlobalClasspaths,
    output: &Path,
) -> Result<()>
where
    P: BuildHxml + ?Sized,
{
    let content = render_project(project, global_classpaths, output)?;

    utils::fs::write_file(output, content.as_bytes())
        .with_context(|| format!("{}: {output:?}", error_messages::FAILURE_WRITING_BUILD_FILE))?;
    log::info!(
        "Generated {output:?} for the target build: {}",
        project.target_build()
    );

    Ok(())
}

/// The content that [`generate_build_file`] would write at `output`
pub fn render_project<P>(
    project: &P,
    global_classpaths: &GlobalClasspaths,
    output: &Path,
) -> Result<String>
where
    P: BuildHxml + ?Sized,
{
    let raw = project
        .build_hxml(global_classpaths.as_slice(), output, true)
        .with_context(|| error_messages::FAILURE_DERIVING_ARGUMENTS)?;
    log::debug!("Raw arguments derived: {raw:?}");

    let args = filter_build_arguments(&raw);
    Ok(render_build_file(&project.target_build(), &args))
}

/// Trims every raw argument and drops the ones that must never reach a build file: the
/// blank ones and the placeholders of the code analysis, `-D no-compilation` and
/// `-D display`. The relative order of the survivors is kept
///
/// ```rust
/// use hxmlgen::hxml::filter_build_arguments;
///
/// let args = filter_build_arguments([" -cp src ", "", "-D display", "-D no-compilation", "-main Main"]);
/// assert_eq!(args, vec!["-cp src", "-main Main"]);
/// ```
pub fn filter_build_arguments<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|arg| {
            let arg = arg.as_ref().trim();
            (!is_discarded(arg)).then(|| arg.to_string())
        })
        .collect()
}

fn is_discarded(arg: &str) -> bool {
    arg.is_empty() || arg == sentinels::NO_COMPILATION || arg == sentinels::DISPLAY
}

/// The textual content of a build file: a `## <target build>` header followed by one
/// argument per line
pub fn render_build_file<S: AsRef<str>>(target_build: &str, args: &[S]) -> String {
    let mut content = String::with_capacity(
        HEADER_PREFIX.len()
            + target_build.len()
            + args.iter().map(|arg| arg.as_ref().len() + 2).sum::<usize>(),
    );

    content.push_str(HEADER_PREFIX);
    content.push_str(target_build);
    content.push_str(LINE_ENDING);

    for arg in args {
        content.push_str(arg.as_ref());
        content.push_str(LINE_ENDING);
    }

    content
}
