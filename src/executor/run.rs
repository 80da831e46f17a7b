//! Process primitives
//!
//! Two ways to run an external tool, both blocking until the child exits:
//!
//! 1. **Passthrough** - the child inherits our stdin/stdout/stderr so
//!    interactive tools (PowerShell prompts, dotnet first-run notices)
//!    behave normally.
//! 2. **Captured** - combined stdout + stderr is collected as text, for
//!    the few decisions that require substring matching on tool output.
//!
//! There are no timeouts and no retries here; a long-running child can
//! only be interrupted by a signal to the whole process.

use std::path::Path;
use std::process::Command;

use crate::error::BuildError;

/// Outcome of a captured invocation
#[derive(Debug)]
pub struct Captured {
    /// Whether the tool exited with status 0
    pub success: bool,
    /// Exit code if the process exited normally
    pub code: Option<i32>,
    /// Combined stdout followed by stderr
    pub output: String,
}

/// Run a tool with our stdio inherited; blocks until it exits.
///
/// # Errors
/// * `BuildError::ToolMissing` - the program could not be found
/// * `BuildError::ToolInvocationFailed` - the program exited non-zero
/// * `BuildError::Io` - any other spawn failure
pub fn run_passthrough(dir: &Path, program: &str, args: &[&str]) -> Result<(), BuildError> {
    let command_str = display_command(program, args);
    tracing::debug!("running: {command_str}");

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| spawn_error(program, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(BuildError::ToolInvocationFailed {
            command: command_str,
            code: status.code(),
        })
    }
}

/// Run a tool capturing combined stdout + stderr.
///
/// Unlike [`run_passthrough`], a non-zero exit is not an error here: the
/// caller owns the interpretation of the captured text and status.
///
/// # Errors
/// * `BuildError::ToolMissing` - the program could not be found
/// * `BuildError::Io` - any other spawn failure
pub fn run_captured(dir: &Path, program: &str, args: &[&str]) -> Result<Captured, BuildError> {
    let command_str = display_command(program, args);
    tracing::debug!("running (captured): {command_str}");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| spawn_error(program, e))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(Captured {
        success: output.status.success(),
        code: output.status.code(),
        output: text,
    })
}

/// Command line as shown in errors and debug logs
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> BuildError {
    if err.kind() == std::io::ErrorKind::NotFound {
        BuildError::ToolMissing {
            tool: program.to_string(),
            error: err.to_string(),
        }
    } else {
        BuildError::Io(err)
    }
}
