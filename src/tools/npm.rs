use camino::Utf8PathBuf;

use crate::config::BuildConfig;
use crate::error::HelperError;
use crate::tools::Runner;
use crate::{Result, warnln};

const NODE_REQUIREMENT: &str = "This project requires node.";

/// Drives `npm` in the project root, after making sure both `npm` and
/// `node` are available.
pub struct NpmRunner {
    npm: Runner,
    project_root: Utf8PathBuf,
}

impl NpmRunner {
    /// Locates `npm` and `node` and checks the installed node version.
    ///
    /// A missing tool is fatal. A node version that does not start with the
    /// configured prefix only produces a warning.
    pub fn new(config: &BuildConfig, verbose: bool) -> Result<Self> {
        let npm = Runner::new("npm", NODE_REQUIREMENT, config.env(), verbose)?;
        let node = Runner::new("node", NODE_REQUIREMENT, config.env(), verbose)?;

        let reported = node
            .exec_output(&["--version"], None)
            .map_err(|e| HelperError::VersionCheck {
                reason: e.to_string(),
            })?;
        let expected = config.node_version_prefix();
        if !version_matches(&reported, expected) {
            warnln!(
                "Unexpected version of 'node' installed ({}). This project requires node {}x. \
                See the README.md file for more information about building the front-end.",
                reported.trim(),
                expected
            );
        } else {
            tracing::debug!(version = reported.trim(), "node version is supported");
        }

        Ok(Self {
            npm,
            project_root: config.project_root().to_path_buf(),
        })
    }

    /// `npm ci`: installs exactly what the lockfile describes.
    pub fn install_dependencies(&self) -> Result<()> {
        self.npm_exec(&["ci"])
    }

    /// `npm run <script>`
    pub fn run_script(&self, script: &str) -> Result<()> {
        self.npm_exec(&["run", script])
    }

    fn npm_exec(&self, args: &[&str]) -> Result<()> {
        self.npm.exec(args, Some(&self.project_root))
    }
}

/// Whether the output of `node --version` starts with `expected_prefix`.
pub(crate) fn version_matches(reported: &str, expected_prefix: &str) -> bool {
    reported.trim().starts_with(expected_prefix)
}
