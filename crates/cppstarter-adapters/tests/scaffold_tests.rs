//! End-to-end scaffolding with the real adapters.

use std::path::Path;

use cppstarter_adapters::{
    EmbeddedStore, LocalFilesystem, MemoryFilesystem, ScriptedRunner,
};
use cppstarter_core::{
    application::{FailurePolicy, PromptService, ScaffoldService, StepKind, StepStatus},
    domain::ProjectSpec,
};
use tempfile::TempDir;

fn local_service(runner: ScriptedRunner) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(EmbeddedStore::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(runner),
    )
}

#[test]
fn demo_project_on_disk() {
    let tmp = TempDir::new().unwrap();
    let report = local_service(ScriptedRunner::new())
        .generate(&ProjectSpec::new("Demo", false).unwrap(), tmp.path())
        .unwrap();
    assert!(report.is_complete());

    let root = tmp.path().join("Demo");
    for dir in ["src", "include", "tests", "build"] {
        assert!(root.join(dir).is_dir(), "missing {dir}/");
    }

    let main = std::fs::read_to_string(root.join("src/main.cpp")).unwrap();
    assert!(main.contains("Hello, Demo!"));

    let makefile = std::fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(makefile.contains("DBG_BIN = build/debug/bin/Demo"));
    assert!(makefile.contains("REL_BIN = build/release/bin/Demo"));
    assert!(!makefile.contains("{{"));

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# Demo\n"));

    assert!(root.join("tests/test_math.cpp").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(!root.join(".git").exists());
}

#[test]
fn git_init_runs_in_the_new_project() {
    let tmp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let report = local_service(runner.clone())
        .generate(&ProjectSpec::new("Demo", true).unwrap(), tmp.path())
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].display(), "git init");
    assert_eq!(calls[0].cwd.as_deref(), Some(tmp.path().join("Demo").as_path()));
    assert!(report.git_initialized());
}

#[test]
fn missing_git_leaves_a_usable_project() {
    let tmp = TempDir::new().unwrap();
    let report = local_service(ScriptedRunner::unavailable())
        .generate(&ProjectSpec::new("Demo", true).unwrap(), tmp.path())
        .unwrap();

    assert!(report.is_complete());
    assert!(!report.git_initialized());
    let warning = report.warnings().next().unwrap();
    assert_eq!(warning.kind, StepKind::Git);
    assert!(tmp.path().join("Demo/Makefile").is_file());
}

#[test]
fn existing_directory_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("Demo");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("keep.txt"), "mine").unwrap();

    let err = local_service(ScriptedRunner::new())
        .generate(&ProjectSpec::new("Demo", false).unwrap(), tmp.path())
        .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
    assert!(!root.join("Makefile").exists());
}

#[test]
fn failed_file_in_memory_is_reported_and_rest_written() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/w/Demo/Makefile");
    let service = ScaffoldService::new(
        Box::new(EmbeddedStore::new()),
        Box::new(fs.clone()),
        Box::new(ScriptedRunner::new()),
    );

    let report = service
        .generate(&ProjectSpec::new("Demo", false).unwrap(), Path::new("/w"))
        .unwrap();

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].path, Path::new("/w/Demo/Makefile"));
    assert!(matches!(failed[0].status, StepStatus::Failed(_)));
    assert!(fs.read_file(Path::new("/w/Demo/README.md")).is_some());
}

#[test]
fn rollback_in_memory_removes_everything() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/w/Demo/README.md");
    let service = ScaffoldService::new(
        Box::new(EmbeddedStore::new()),
        Box::new(fs.clone()),
        Box::new(ScriptedRunner::new()),
    )
    .with_policy(FailurePolicy::Rollback);

    assert!(
        service
            .generate(&ProjectSpec::new("Demo", false).unwrap(), Path::new("/w"))
            .is_err()
    );
    assert!(fs.list_files().is_empty());
    assert!(!fs.is_dir(Path::new("/w/Demo")));
}

#[cfg(unix)]
#[test]
fn prompt_script_is_executable_and_overwritten() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("min.sh");
    std::fs::write(&target, "old").unwrap();

    let service = PromptService::new(
        Box::new(EmbeddedStore::new()),
        Box::new(LocalFilesystem::new()),
    );
    let path = service.write_minimal_prompt(tmp.path()).unwrap();

    assert_eq!(path, target);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#!/bin/bash"));
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
}
