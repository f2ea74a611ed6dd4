use camino::{Utf8Path, Utf8PathBuf};

use crate::Result;
use crate::env::HelperEnv;
use crate::tools::{CommandLine, Runner};

const MKDIR_REQUIREMENT: &str = "Installing the built front-end requires mkdir.";

/// Creates directories with `mkdir -p`.
pub struct MkdirRunner {
    mkdir: Runner,
    working_dir: Utf8PathBuf,
}

impl MkdirRunner {
    pub fn new(env: &HelperEnv, working_dir: &Utf8Path, verbose: bool) -> Result<Self> {
        Ok(Self {
            mkdir: Runner::new("mkdir", MKDIR_REQUIREMENT, env, verbose)?,
            working_dir: working_dir.to_path_buf(),
        })
    }

    /// Creates `path` along with any missing ancestors. An existing
    /// directory is not an error.
    pub fn create_dir_all(&self, path: &Utf8Path) -> Result<()> {
        self.mkdir.exec(&["-p", path.as_str()], Some(&self.working_dir))
    }

    /// The command line [`MkdirRunner::create_dir_all`] runs, for display.
    pub fn describe(&self, path: &Utf8Path) -> String {
        CommandLine {
            program: self.mkdir.tool_name(),
            args: &["-p", path.as_str()],
        }
        .to_string()
    }
}
