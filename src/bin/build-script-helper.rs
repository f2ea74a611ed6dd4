use std::process;

use build_script_helper::cli::{Cli, Invocation};
use build_script_helper::config::BuildConfig;
use build_script_helper::env::HelperEnv;
use build_script_helper::{Result, errln, logger};
use clap::Parser;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // clap has already formatted usage; help and version are not failures
            let _ = error.print();
            process::exit(if error.use_stderr() { 1 } else { 0 })
        }
    };

    if let Err(error) = run(cli) {
        tracing::debug!(?error);
        errln!("{:#}", error);
        process::exit(1)
    }
}

fn run(cli: Cli) -> Result<()> {
    logger::init(cli.log_level);
    tracing::trace!(command_structure = ?cli);

    let invocation = Invocation::try_from(cli)?;
    let config = BuildConfig::new(HelperEnv::snapshot())?;
    invocation.run(&config)
}
