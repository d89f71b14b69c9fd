use crate::output_utils;
use std::process::ExitCode;

/// What a subcommand prints and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {fmt_args}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Failure caused by I/O or argument plumbing rather than by a query.
    pub fn error(err: &anyhow::Error) -> Self {
        Self::stderr(format_args!("{err:#}"))
    }

    /// Keeps whatever was produced before the failure on stdout.
    pub fn with_stdout(mut self, stdout: String) -> Self {
        if !stdout.is_empty() {
            self.stdout = Some(stdout);
        }
        self
    }
}
