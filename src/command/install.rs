use camino::Utf8PathBuf;

use crate::config::{BUILD_OUTPUT_DIR_NAME, BuildConfig};
use crate::error::HelperError;
use crate::style::Style;
use crate::tools::{MkdirRunner, RsyncRunner};
use crate::{Result, noteln};

/// `install`: copy the contents of the build output directory into a
/// caller-chosen destination, creating it first.
///
/// Relative destinations resolve against the project root, which is the
/// working directory of both `mkdir` and `rsync`.
#[derive(Debug)]
pub struct Install {
    install_dir: Utf8PathBuf,
}

impl Install {
    pub fn new(install_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
        }
    }

    pub fn run(&self, config: &BuildConfig) -> Result<()> {
        let build_dir = config.build_dir();
        if !build_dir.is_dir() {
            return Err(HelperError::MissingBuildOutput {
                build_dir: build_dir.to_string(),
            }
            .into());
        }

        // `install` does not echo commands; each step is announced below instead.
        let mkdir = MkdirRunner::new(config.env(), config.project_root(), false)?;
        let rsync = RsyncRunner::new(config.env(), config.project_root(), false)?;

        noteln!(
            "creating target directory {}: {}",
            Style::Path.paint(self.install_dir.as_str()),
            mkdir.describe(&self.install_dir)
        );
        mkdir.create_dir_all(&self.install_dir)?;

        noteln!(
            "installing {}: {}",
            Style::Path.paint(BUILD_OUTPUT_DIR_NAME),
            rsync.describe(build_dir, &self.install_dir)
        );
        rsync.sync_contents(build_dir, &self.install_dir)?;

        Ok(())
    }
}
