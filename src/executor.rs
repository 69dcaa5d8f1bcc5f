use crate::platform::CommandLine;

use std::process::Command;

/// Why a command did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecFailure {
    /// Exit status, `None` when the process never started or was signalled.
    pub status: Option<i32>,
    /// Whatever the command wrote to stdout before failing.
    pub stdout: String,
    pub message: String,
}

impl ExecFailure {
    /// Listing tools exit with 1 and print nothing when no socket matched.
    pub fn is_no_match(&self) -> bool {
        self.status == Some(1) && self.stdout.trim().is_empty()
    }
}

/// Runs a resolved command line and hands back its captured stdout.
pub trait CommandExecutor {
    fn run(&self, command: &CommandLine) -> Result<String, ExecFailure>;
}

/// Executes commands through the platform shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &CommandLine) -> Result<String, ExecFailure> {
        let (shell, args) = command.shell_invocation();
        let output = Command::new(shell)
            .args(args)
            .output()
            .map_err(|e| ExecFailure {
                status: None,
                stdout: String::new(),
                message: format!("Failed to execute {}: {}", command, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        log::debug!("`{}` exited with {}", command, output.status);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExecFailure {
                status: output.status.code(),
                stdout,
                message: format!(
                    "Command failed: {} (exit status {}) {}",
                    command,
                    output
                        .status
                        .code()
                        .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
                    stderr.trim()
                )
                .trim_end()
                .to_string(),
            });
        }

        Ok(stdout)
    }
}
