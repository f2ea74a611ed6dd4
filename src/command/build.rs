use crate::Result;
use crate::config::BuildConfig;
use crate::tools::NpmRunner;

/// The npm scripts this helper knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpmScript {
    Build,
    Test,
}

impl NpmScript {
    pub const fn name(self) -> &'static str {
        match self {
            NpmScript::Build => "build",
            NpmScript::Test => "test",
        }
    }
}

/// `build` and `test`: check the toolchain, install the locked
/// dependencies, then run the matching npm script. The first failure
/// stops everything after it.
#[derive(Debug)]
pub struct Build {
    script: NpmScript,
    verbose: bool,
}

impl Build {
    pub const fn new(script: NpmScript, verbose: bool) -> Self {
        Self { script, verbose }
    }

    pub fn run(&self, config: &BuildConfig) -> Result<()> {
        let npm = NpmRunner::new(config, self.verbose)?;
        npm.install_dependencies()?;
        npm.run_script(self.script.name())?;
        Ok(())
    }
}
