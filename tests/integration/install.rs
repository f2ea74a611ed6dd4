#![cfg(unix)]

use assert_fs::prelude::*;
use predicates::prelude::*;
use speculoos::prelude::*;

use super::sandbox::{MKDIR, RSYNC, Sandbox};

fn sandbox_with_build_output() -> Sandbox {
    let sandbox = Sandbox::new();
    let dist = sandbox.project.child("dist");
    dist.child("js").create_dir_all().unwrap();
    dist.child("css").create_dir_all().unwrap();
    dist.child("index.html").write_str("<html></html>").unwrap();
    dist.child("js").child("index.js").write_str("main();").unwrap();
    dist.child("css").child("index.css").write_str("body {}").unwrap();
    sandbox
}

/// The tests that exercise the real `mkdir` and `rsync` only run where
/// rsync is installed; elsewhere they say so on stderr.
fn rsync_is_installed(test: &str) -> bool {
    let installed = which::which("rsync").is_ok();
    if !installed {
        eprintln!("skipping {test}: rsync is not installed");
    }
    installed
}

#[test]
fn it_creates_the_destination_then_syncs_contents() {
    let sandbox = sandbox_with_build_output();
    sandbox.tool("mkdir", MKDIR);
    sandbox.tool("rsync", RSYNC);

    sandbox
        .command()
        .args(["install", "--install-dir", "/tmp/out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "note: creating target directory /tmp/out: mkdir -p /tmp/out",
        ))
        .stdout(predicate::str::contains("note: installing dist: rsync -a "));

    let root = sandbox.root();
    assert_that!(sandbox.calls()).is_equal_to(vec![
        format!("mkdir -p /tmp/out @ {}", root.display()),
        format!("rsync -a {}/dist/ /tmp/out", root.display()),
    ]);
}

#[test]
fn it_fails_when_sync_fails() {
    let sandbox = sandbox_with_build_output();
    sandbox.tool("mkdir", MKDIR);
    sandbox.tool("rsync", RSYNC);

    sandbox
        .command()
        .args(["install", "--install-dir", "/tmp/out"])
        .env("FAKE_RSYNC_EXIT", "23")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed with exit status 23"));
}

#[test]
fn it_requires_rsync() {
    let sandbox = sandbox_with_build_output();
    sandbox.tool("mkdir", MKDIR);

    sandbox
        .command()
        .args(["install", "--install-dir", "/tmp/out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not locate 'rsync'"));

    assert_that!(sandbox.calls()).is_empty();
}

#[test]
fn it_requires_build_output() {
    let sandbox = Sandbox::new();
    sandbox.tool("mkdir", MKDIR);
    sandbox.tool("rsync", RSYNC);

    sandbox
        .command()
        .args(["install", "--install-dir", "/tmp/out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Run the 'build' action first."));

    assert_that!(sandbox.calls()).is_empty();
}

#[test]
fn it_copies_into_an_existing_destination_without_removing_files() {
    if !rsync_is_installed("it_copies_into_an_existing_destination_without_removing_files") {
        return;
    }
    let sandbox = sandbox_with_build_output().with_system_path();
    let out = assert_fs::TempDir::new().unwrap();
    out.child("unrelated.txt").write_str("keep me").unwrap();
    out.child("index.html").write_str("stale").unwrap();

    sandbox
        .command()
        .args(["install", "--install-dir", out.path().to_str().unwrap()])
        .assert()
        .success();

    out.child("unrelated.txt").assert("keep me");
    out.child("index.html").assert("<html></html>");
    out.child("js").child("index.js").assert("main();");
    out.child("css").child("index.css").assert("body {}");
}

#[test]
fn it_creates_missing_ancestors() {
    if !rsync_is_installed("it_creates_missing_ancestors") {
        return;
    }
    let sandbox = sandbox_with_build_output().with_system_path();
    let out = assert_fs::TempDir::new().unwrap();
    let destination = out.child("a").child("b").child("c");

    sandbox
        .command()
        .args(["install", "--install-dir", destination.path().to_str().unwrap()])
        .assert()
        .success();

    destination.child("index.html").assert("<html></html>");
    destination.child("js").child("index.js").assert("main();");
}
