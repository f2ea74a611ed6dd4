pub use anyhow::{Context, anyhow};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

const README_HINT: &str = "See the README.md file for more information about building the front-end.";

/// The failures this helper reports to its caller. Every one of them is
/// terminal: the binary prints it and exits with status 1.
#[derive(thiserror::Error, Debug)]
pub enum HelperError {
    /// `install` was requested without a destination.
    #[error("Missing required '--install-dir' argument.")]
    MissingInstallDir,

    /// `--install-dir` was passed to an action that does not install.
    #[error("Unexpected '--install-dir' argument for '{action}' command.")]
    UnexpectedInstallDir { action: String },

    /// A required executable is not on the search path.
    #[error("Could not locate '{tool}'. {requirement} {}", README_HINT)]
    ToolMissing {
        tool: String,
        requirement: String,
        #[source]
        source: which::Error,
    },

    /// `node --version` could not be run or did not succeed.
    #[error("Could not check 'node' version ({reason}). This project requires node. {}", README_HINT)]
    VersionCheck { reason: String },

    /// The build output has not been produced yet.
    #[error("There is no build output to install at `{build_dir}`. Run the 'build' action first.")]
    MissingBuildOutput { build_dir: String },

    /// An external command exited unsuccessfully.
    #[error("`{command}` {}", describe_status(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("failed with exit status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
