use std::fmt;
use std::process::{Command, ExitStatus, Stdio};
use std::str;

use camino::{Utf8Path, Utf8PathBuf};
use which::which_in;

use crate::Result;
use crate::env::HelperEnv;
use crate::error::{Context, HelperError};
use crate::style::Style;

/// Runs one external tool, resolved once on the snapshot's search path.
///
/// Every child gets exactly the environment in [`HelperEnv`], and any
/// unsuccessful exit is returned as [`HelperError::CommandFailed`].
#[derive(Debug)]
pub struct Runner {
    verbose: bool,
    tool_name: String,
    tool_exe: Utf8PathBuf,
    env: HelperEnv,
}

impl Runner {
    /// Locates `tool_name` on the `PATH` of `env`.
    ///
    /// `requirement` explains to the user why the tool is needed and is
    /// only shown when it cannot be found.
    pub fn new(
        tool_name: &str,
        requirement: &str,
        env: &HelperEnv,
        verbose: bool,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Could not read the current directory.")?;
        let tool_exe = which_in(tool_name, env.search_path(), cwd).map_err(|source| {
            HelperError::ToolMissing {
                tool: tool_name.to_string(),
                requirement: requirement.to_string(),
                source,
            }
        })?;
        let tool_exe: Utf8PathBuf = tool_exe
            .try_into()
            .with_context(|| format!("The path to '{tool_name}' is not valid UTF-8."))?;
        tracing::debug!(tool = tool_name, exe = %tool_exe, "located tool");

        Ok(Runner {
            verbose,
            tool_name: tool_name.to_string(),
            tool_exe,
            env: env.clone(),
        })
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Runs the tool with inherited stdio and waits for it to finish.
    pub fn exec(&self, args: &[&str], directory: Option<&Utf8Path>) -> Result<()> {
        let command_line = self.command_line(args);
        let mut command = self.command(args, directory);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = command
            .status()
            .with_context(|| format!("Could not spawn `{command_line}`."))?;
        check_status(status, &command_line)
    }

    /// Runs the tool and returns what it printed to stdout.
    pub fn exec_output(&self, args: &[&str], directory: Option<&Utf8Path>) -> Result<String> {
        let command_line = self.command_line(args);
        let mut command = self.command(args, directory);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let output = command
            .output()
            .with_context(|| format!("Could not spawn `{command_line}`."))?;
        check_status(output.status, &command_line)?;
        let stdout = str::from_utf8(&output.stdout)
            .with_context(|| format!("The output of `{command_line}` was not valid UTF-8."))?;
        Ok(stdout.to_string())
    }

    fn command(&self, args: &[&str], directory: Option<&Utf8Path>) -> Command {
        let command_line = self.command_line(args);
        if self.verbose {
            println!("{}", Style::Command.paint(command_line.to_string()));
        }
        tracing::debug!(command = %command_line, ?directory, "running");

        let mut command = Command::new(&self.tool_exe);
        command.args(args).env_clear().envs(self.env.iter());
        if let Some(directory) = directory {
            command.current_dir(directory);
        }
        command
    }

    fn command_line<'a>(&'a self, args: &'a [&'a str]) -> CommandLine<'a> {
        CommandLine {
            program: &self.tool_name,
            args,
        }
    }
}

fn check_status(status: ExitStatus, command_line: &CommandLine<'_>) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        tracing::debug!(%status, command = %command_line, "command failed");
        Err(HelperError::CommandFailed {
            command: command_line.to_string(),
            code: status.code(),
        }
        .into())
    }
}

/// A command line as it would be typed back into a shell.
#[derive(Debug, Clone, Copy)]
pub struct CommandLine<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote_arg(self.program))?;
        for arg in self.args {
            write!(f, " {}", quote_arg(arg))?;
        }
        Ok(())
    }
}

/// Wraps `arg` in double quotes when it contains a space or a double
/// quote, escaping any inner double quotes.
pub fn quote_arg(arg: &str) -> String {
    if arg.contains('"') || arg.contains(' ') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
