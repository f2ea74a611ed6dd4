use std::path::MAIN_SEPARATOR_STR;

use camino::{Utf8Path, Utf8PathBuf};

use crate::Result;
use crate::env::HelperEnv;
use crate::tools::{CommandLine, Runner};

const RSYNC_REQUIREMENT: &str = "Installing the built front-end requires rsync.";

/// Copies directory trees with `rsync -a`.
pub struct RsyncRunner {
    rsync: Runner,
    working_dir: Utf8PathBuf,
}

impl RsyncRunner {
    pub fn new(env: &HelperEnv, working_dir: &Utf8Path, verbose: bool) -> Result<Self> {
        Ok(Self {
            rsync: Runner::new("rsync", RSYNC_REQUIREMENT, env, verbose)?,
            working_dir: working_dir.to_path_buf(),
        })
    }

    /// Copies the contents of `source` into `destination`, preserving
    /// attributes. Files already in `destination` that do not exist in
    /// `source` are left alone.
    pub fn sync_contents(&self, source: &Utf8Path, destination: &Utf8Path) -> Result<()> {
        let source = with_trailing_separator(source);
        self.rsync.exec(
            &sync_args(&source, destination.as_str()),
            Some(&self.working_dir),
        )
    }

    /// The command line [`RsyncRunner::sync_contents`] runs, for display.
    pub fn describe(&self, source: &Utf8Path, destination: &Utf8Path) -> String {
        let source = with_trailing_separator(source);
        let args = sync_args(&source, destination.as_str());
        CommandLine {
            program: self.rsync.tool_name(),
            args: &args,
        }
        .to_string()
    }
}

fn sync_args<'a>(source: &'a str, destination: &'a str) -> [&'a str; 3] {
    ["-a", source, destination]
}

/// rsync copies a directory's contents, rather than the directory itself,
/// only when the source ends with a separator.
fn with_trailing_separator(path: &Utf8Path) -> String {
    let path = path.as_str();
    if path.ends_with(MAIN_SEPARATOR_STR) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR_STR}")
    }
}
