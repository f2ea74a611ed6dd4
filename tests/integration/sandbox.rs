#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

pub const NPM: &str = r#"#!/bin/sh
echo "npm $* @ $(pwd)" >> "$FAKE_TOOL_LOG"
if [ "$1" = "ci" ] && [ -n "$FAKE_NPM_CI_EXIT" ]; then
  exit "$FAKE_NPM_CI_EXIT"
fi
exit 0
"#;

pub const NODE: &str = r#"#!/bin/sh
echo "node $*" >> "$FAKE_TOOL_LOG"
if [ -n "$FAKE_NODE_EXIT" ]; then
  exit "$FAKE_NODE_EXIT"
fi
echo "${FAKE_NODE_VERSION:-v14.17.4}"
"#;

pub const MKDIR: &str = r#"#!/bin/sh
echo "mkdir $* @ $(pwd)" >> "$FAKE_TOOL_LOG"
"#;

pub const RSYNC: &str = r#"#!/bin/sh
echo "rsync $*" >> "$FAKE_TOOL_LOG"
exit "${FAKE_RSYNC_EXIT:-0}"
"#;

/// A throwaway project root plus a `bin` directory of fake tools that
/// record every invocation in a log file.
pub struct Sandbox {
    pub project: TempDir,
    bin: ChildPath,
    log: ChildPath,
    extra_path: Option<String>,
}

impl Sandbox {
    pub fn new() -> Self {
        let project = TempDir::new().unwrap();
        let bin = project.child("fake-bin");
        bin.create_dir_all().unwrap();
        let log = project.child("tools.log");
        Sandbox {
            project,
            bin,
            log,
            extra_path: None,
        }
    }

    /// A sandbox with working `npm` and `node`.
    pub fn with_node() -> Self {
        let sandbox = Self::new();
        sandbox.tool("npm", NPM);
        sandbox.tool("node", NODE);
        sandbox
    }

    pub fn tool(&self, name: &str, script: &str) {
        let tool = self.bin.child(name);
        tool.write_str(script).unwrap();
        fs::set_permissions(tool.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Lets the helper find real system tools after the fake ones.
    pub fn with_system_path(mut self) -> Self {
        self.extra_path = std::env::var("PATH").ok();
        self
    }

    pub fn root(&self) -> PathBuf {
        fs::canonicalize(self.project.path()).unwrap()
    }

    pub fn command(&self) -> Command {
        let path = match &self.extra_path {
            Some(extra) => format!("{}:{}", self.bin.path().display(), extra),
            None => self.bin.path().display().to_string(),
        };
        let mut cmd = Command::cargo_bin("build-script-helper").unwrap();
        cmd.env_clear()
            .env("PATH", path)
            .env("NO_COLOR", "1")
            .env("FAKE_TOOL_LOG", self.log.path())
            .env("BUILD_HELPER_PROJECT_ROOT", self.project.path());
        cmd
    }

    /// Every recorded tool invocation, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log.path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
