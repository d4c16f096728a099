//! Subprocess execution helpers
//!
//! Two modes are needed: a captured query (`-showBuildSettings`) and the
//! main xcodebuild invocation, which inherits the terminal so build output
//! streams through unchanged.

#![allow(dead_code)]

use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// The external build tool this crate wraps
pub const XCODEBUILD: &str = "xcodebuild";

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output (empty for inherited IO)
    pub stdout: String,

    /// Captured standard error (empty for inherited IO)
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        let exit_code = status.code().unwrap_or(-1);
        Self {
            success: status.success(),
            exit_code,
            stdout,
            stderr,
            duration,
        }
    }
}

/// Run a command with stdin/stdout/stderr inherited from this process
pub fn run_inherited(program: &str, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program))?;

    Ok(CommandResult::from_status(
        status,
        String::new(),
        String::new(),
        start.elapsed(),
    ))
}

/// Run a command capturing its output as text
pub fn run_captured(program: &str, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute {}", program))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    Ok(CommandResult::from_status(
        output.status,
        stdout,
        stderr,
        start.elapsed(),
    ))
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists_for_shell() {
        // `sh` is present on every supported platform
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-tool-xcgo"));
    }

    #[test]
    fn test_run_captured_collects_stdout() {
        let result = run_captured("sh", &["-c".to_string(), "echo hello".to_string()]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn test_exit_code_propagation() {
        let result = run_captured("sh", &["-c".to_string(), "exit 65".to_string()]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 65);
    }
}
