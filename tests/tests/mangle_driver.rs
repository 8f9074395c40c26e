//! Mangling driver against a scripted variant source.

use dirspec_mangler::{MangleConfig, MangleDriver, MangleError, MangleResult};
use dirspec_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;
use std::path::Path;

/// Stand-in plugin: emits one variant per `!$omp` line, upper-casing that line.
fn omp_lines(input: &Path, offset: NonZeroUsize) -> MangleResult<Option<String>> {
    let source = std::fs::read_to_string(input).map_err(|e| MangleError::io(input, e))?;
    let target = source
        .lines()
        .enumerate()
        .filter(|(_, l)| l.trim_start().starts_with("!$omp"))
        .nth(offset.get() - 1)
        .map(|(i, _)| i);

    Ok(target.map(|n| {
        source
            .lines()
            .enumerate()
            .map(|(i, l)| if i == n { l.to_uppercase() } else { l.to_string() })
            .collect::<Vec<_>>()
            .join("\n")
    }))
}

// ========== TEST: project_run ==========

#[test]
fn test_project_run_writes_numbered_variants() {
    // GIVEN a project with two base tests and a stale output
    let project = MangleProject::new()
        .base_test("parallel.f90", "program p\n!$omp parallel\n!$omp end parallel\nend\n")
        .base_test("serial.f90", "program s\nend\n");
    std::fs::create_dir(project.out_dir()).unwrap();
    std::fs::write(project.out_dir().join("stale.1.f90"), "old").unwrap();
    let config = MangleConfig::for_project(project.path(), "unused-flang");

    // WHEN running the driver with the scripted source
    let driver = MangleDriver::new(omp_lines, &config.test_dir, &config.out_dir);
    let summary = driver.run().unwrap();

    // THEN each directive line yields one numbered file and stale output is gone
    assert_eq!(project.outputs(), ["parallel.1.f90", "parallel.2.f90"]);
    assert_eq!(
        project.output("parallel.2.f90"),
        "program p\n!$omp parallel\n!$OMP END PARALLEL\nend"
    );
    let counts: Vec<_> = summary.files.iter().map(|f| f.variants).collect();
    assert_eq!(counts, [2, 0]);
}

#[test]
fn test_missing_output_dir_is_created() {
    let project = MangleProject::new().base_test("t.f90", "!$omp barrier\n");

    let driver = MangleDriver::new(omp_lines, project.test_dir(), project.out_dir());
    let summary = driver.run().unwrap();

    assert_eq!(summary.total_variants(), 1);
    assert_eq!(project.outputs(), ["t.1.f90"]);
}

#[test]
fn test_config_points_plugin_at_project_build() {
    let project = MangleProject::new();

    let config = MangleConfig::for_project(project.path(), "flang-new");
    let cmd = config
        .plugin()
        .command(&project.test_dir().join("t.f90"), NonZeroUsize::MIN);

    let lib = project.path().join("build/libtestMangler.so");
    assert!(cmd.get_args().any(|a| a == lib.as_os_str()));
}
