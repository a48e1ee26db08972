// External project scaffolding tool (`dotnet new console` by default)

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::models::workspace_config::ScaffoldCommand;
use crate::utils::error::ProcessError;

/// Creates the console project inside a workspace root
#[allow(async_fn_in_trait)]
pub trait ScaffoldTool {
    /// Human readable command line, used in messages
    fn describe(&self) -> String;

    /// Run the tool to completion in `cwd`. A non-zero exit is an error.
    async fn run(&self, cwd: &Path) -> Result<(), ProcessError>;
}

/// Runs the configured command as a child process
#[derive(Debug, Clone)]
pub struct ProcessScaffoldTool {
    command: ScaffoldCommand,
    /// Send the child's stdout to our stderr (keeps stdout clean for JSON)
    stdout_to_stderr: bool,
}

impl ProcessScaffoldTool {
    pub const fn new(command: ScaffoldCommand, stdout_to_stderr: bool) -> Self {
        Self {
            command,
            stdout_to_stderr,
        }
    }
}

impl ScaffoldTool for ProcessScaffoldTool {
    fn describe(&self) -> String {
        self.command.display()
    }

    async fn run(&self, cwd: &Path) -> Result<(), ProcessError> {
        let program = self.command.program.clone();
        tracing::info!(command = %self.describe(), cwd = %cwd.display(), "running scaffold tool");

        let stdout = if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        };

        let status = Command::new(&program)
            .args(&self.command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ProcessError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(%status, "scaffold tool failed");
            return Err(ProcessError::NonZeroExit {
                program,
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
