use clap::Parser;
use color_eyre::Result;
use std::{fs, path::Path};
use tempfile::tempdir;
use hxmlgen::cli::input::CliArgs;

const LINE_ENDING: &str = if cfg!(target_os = "windows") {
    "\r\n"
} else {
    "\n"
};

const FLASH_PROJECT: &str = r#"
    [project]
    name = 'flash game'
    target_build = 'flash'

    [compiler]
    target = 'flash'
    main_class = 'Main'
    output = 'out.swf'

    [build]
    raw_hxml = [ '-swf out.swf', '', '-D no-compilation', '  -D display  ', '-main Main' ]
"#;

const JS_PROJECT: &str = r#"
    [project]
    name = 'web app'
    classpaths = [ 'src', 'shared lib' ]
    compile_targets = [ 'src/app/Tools.hx' ]

    [compiler]
    target = 'js'
    main_class = 'app.Main'
    output = 'bin/app.js'
    libraries = [ 'tink_core' ]
    defines = [ 'js-es=6', 'display' ]
    additional = [ '# dead code elimination', '--dce full' ]
"#;

const OTHER_PROJECT: &str = r#"
    [project]
    name = 'legacy'
    kind = 'as3'
"#;

fn generate(root: &Path, settings_dir: &Path, extra: &[&str]) -> Result<()> {
    let mut args = vec![
        "",
        "--settings-dir",
        settings_dir.to_str().expect("Temporary paths are UTF-8"),
        "generate",
    ];
    args.extend_from_slice(extra);
    hxmlgen::worker::run_hxmlgen(&CliArgs::parse_from(args), root)
}

#[test]
fn test_raw_hxml_is_filtered_into_the_build_file() -> Result<()> {
    let temp = tempdir()?;
    let settings = tempdir()?;
    fs::write(temp.path().join("hxproject.toml"), FLASH_PROJECT)?;

    generate(temp.path(), settings.path(), &[])?;

    let expected = ["## flash", "-swf out.swf", "-main Main"]
        .iter()
        .map(|line| format!("{line}{LINE_ENDING}"))
        .collect::<String>();
    assert_eq!(fs::read_to_string(temp.path().join("build.hxml"))?, expected);

    Ok(temp.close()?)
}

#[test]
fn test_derived_arguments_for_a_js_project() -> Result<()> {
    let temp = tempdir()?;
    let settings = tempdir()?;
    let root = temp.path().canonicalize()?;
    let project_dir = root.join("web");
    fs::create_dir_all(project_dir.join("src").join("app"))?;
    fs::write(project_dir.join("hxproject_web.toml"), JS_PROJECT)?;

    let output = project_dir.join("hxml").join("release.hxml");
    fs::create_dir_all(output.parent().expect("The output has a parent"))?;

    generate(
        &root,
        settings.path(),
        &["--output", output.to_str().expect("Temporary paths are UTF-8")],
    )?;

    let content = fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    let cp_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.starts_with("-cp"))
        .collect();

    assert_eq!(lines[0], "## js");
    assert_eq!(lines[1], "-lib tink_core");
    assert!(cp_lines.ends_with(&["-cp ../src", "-cp \"../shared lib\""]));
    assert!(lines.contains(&"-D js-es=6"));
    assert!(lines.contains(&"app.Tools"));
    assert!(lines.contains(&"-main app.Main"));
    assert!(lines.contains(&"--dce full"));
    assert_eq!(lines.last(), Some(&"-js ../bin/app.js"));
    assert!(!lines.contains(&"-D display"));
    assert!(!lines.contains(&"-D no-compilation"));
    assert!(!content.contains("dead code elimination"));

    Ok(temp.close()?)
}

#[test]
fn test_two_runs_produce_identical_files() -> Result<()> {
    let temp = tempdir()?;
    let settings = tempdir()?;
    fs::write(temp.path().join("hxproject.toml"), FLASH_PROJECT)?;

    generate(temp.path(), settings.path(), &[])?;
    let first = fs::read(temp.path().join("build.hxml"))?;
    generate(temp.path(), settings.path(), &[])?;

    assert_eq!(first, fs::read(temp.path().join("build.hxml"))?);
    Ok(temp.close()?)
}

#[test]
fn test_non_haxe_projects_are_skipped() -> Result<()> {
    let temp = tempdir()?;
    let settings = tempdir()?;
    fs::write(temp.path().join("hxproject.toml"), OTHER_PROJECT)?;

    generate(temp.path(), settings.path(), &[])?;

    assert!(!temp.path().join("build.hxml").exists());
    Ok(temp.close()?)
}

#[test]
fn test_unwritable_output_fails_with_an_io_error() -> Result<()> {
    let temp = tempdir()?;
    let settings = tempdir()?;
    fs::write(temp.path().join("hxproject.toml"), FLASH_PROJECT)?;
    let output = temp.path().join("missing").join("build.hxml");

    let err = generate(
        temp.path(),
        settings.path(),
        &["--output", output.to_str().expect("Temporary paths are UTF-8")],
    )
    .expect_err("The parent directory of the output does not exist");

    assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    Ok(temp.close()?)
}
