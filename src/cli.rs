use camino::Utf8PathBuf;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, ValueEnum};

use crate::command::{Build, Install, NpmScript};
use crate::config::BuildConfig;
use crate::error::HelperError;
use crate::logger::{LEVELS, Level};
use crate::{Result, successln};

const ABOUT: &str = "Build, test, and install script for Swift-DocC-Render.";

const LONG_ABOUT: &str = "Build, test, and install script for Swift-DocC-Render.

To build Swift-DocC and Swift-DocC-Render alongside Swift itself, Swift-DocC-Render
needs to be checked out alongside Swift-DocC (https://github.com/apple/swift-docc/)
and the main Swift repo (https://github.com/apple/swift/) in the following structure:

- (containing directory)
  - swift
  - swift-docc
  - swift-docc-render
";

#[derive(Debug, Parser)]
#[command(name = "build-script-helper", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Cli {
    /// The action to perform
    #[arg(value_enum)]
    pub build_action: BuildAction,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// The directory to where the built template content should be installed.
    #[arg(long = "install-dir", value_name = "PATH")]
    pub install_dir: Option<Utf8PathBuf>,

    /// Specify the helper's diagnostic log level
    #[arg(
        long = "log",
        short = 'l',
        value_name = "LEVEL",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LEVELS)
            .map(|level| level.parse::<Level>().unwrap_or(Level::INFO))
    )]
    pub log_level: Option<Level>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildAction {
    Build,
    Test,
    Install,
}

impl BuildAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            BuildAction::Build => "build",
            BuildAction::Test => "test",
            BuildAction::Install => "install",
        }
    }
}

/// The validated arguments of one run.
///
/// `install_dir` is present exactly when `action` is
/// [`BuildAction::Install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    action: BuildAction,
    verbose: bool,
    install_dir: Option<Utf8PathBuf>,
}

impl Invocation {
    pub fn action(&self) -> BuildAction {
        self.action
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn install_dir(&self) -> Option<&Utf8PathBuf> {
        self.install_dir.as_ref()
    }

    /// Runs the requested action to completion, stopping at the first
    /// failure.
    pub fn run(&self, config: &BuildConfig) -> Result<()> {
        tracing::debug!(invocation = ?self);
        match (self.action, &self.install_dir) {
            (BuildAction::Install, Some(install_dir)) => {
                Install::new(install_dir.clone()).run(config)?
            }
            (BuildAction::Build, None) => Build::new(NpmScript::Build, self.verbose).run(config)?,
            (BuildAction::Test, None) => Build::new(NpmScript::Test, self.verbose).run(config)?,
            (BuildAction::Install, None) => return Err(HelperError::MissingInstallDir.into()),
            (action, Some(_)) => {
                return Err(HelperError::UnexpectedInstallDir {
                    action: action.as_str().to_string(),
                }
                .into());
            }
        }
        successln!("{} succeeded.", self.action.as_str());
        Ok(())
    }
}

impl TryFrom<Cli> for Invocation {
    type Error = HelperError;

    fn try_from(cli: Cli) -> std::result::Result<Self, Self::Error> {
        match (cli.build_action, &cli.install_dir) {
            (BuildAction::Install, None) => Err(HelperError::MissingInstallDir),
            (BuildAction::Build | BuildAction::Test, Some(_)) => {
                Err(HelperError::UnexpectedInstallDir {
                    action: cli.build_action.as_str().to_string(),
                })
            }
            _ => Ok(Invocation {
                action: cli.build_action,
                verbose: cli.verbose,
                install_dir: cli.install_dir,
            }),
        }
    }
}
