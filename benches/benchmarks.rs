//! Benchmarks tests for measuring the performance of the code

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hxmlgen::{
    config_file::{self, HxProjectFile},
    environment::GlobalClasspaths,
    hxml::{self, filter_build_arguments},
    utils::reader::build_model,
};

const PROJECT_FILE: &str = r#"
    [project]
    name = 'benchmarks'
    classpaths = [ 'src', 'vendor/src', 'shared assets' ]
    compile_targets = [ 'src/tools/Extra.hx', 'src/tools/Other.hx' ]

    [compiler]
    target = 'flash'
    main_class = 'Main'
    output = 'bin/Main.swf'
    libraries = [ 'actuate', 'openfl', 'lime' ]
    defines = [ 'analyzer-optimize', 'display' ]
    additional = [ '--dce full', '# a comment', '--macro include("tools")' ]
    flash_strict = true
"#;

pub fn build_hxml_benchmark(c: &mut Criterion) {
    let config: HxProjectFile = config_file::hx_project_from_file(PROJECT_FILE)
        .expect("The benchmarks project file must be valid");
    let model = build_model(config, Path::new("/benchmarks"))
        .expect("The benchmarks project model must be valid");
    let project = model
        .as_supported()
        .expect("The benchmarks project is a Haxe project");
    let global_classpaths = GlobalClasspaths::new(["/haxe/std", "/haxe/lib"]);
    let output = Path::new("/benchmarks/build.hxml");

    c.bench_function("Parse the project file", |b| {
        b.iter(|| config_file::hx_project_from_file(black_box(PROJECT_FILE)))
    });

    c.bench_function("Render the build file", |b| {
        b.iter(|| hxml::render_project(black_box(project), &global_classpaths, output))
    });

    let raw = vec![" -lib openfl", "", "-D no-compilation", "-D display", "-main Main"];
    c.bench_function("Filter the raw arguments", |b| {
        b.iter(|| filter_build_arguments(black_box(&raw)))
    });
}

criterion_group!(benches, build_hxml_benchmark);
criterion_main!(benches);
