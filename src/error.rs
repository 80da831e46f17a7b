//! Error types for buildit
//!
//! Every recipe step reports its outcome through `BuildError`; nothing is
//! logged-and-continued. The binary maps each error class to a distinct
//! exit code so callers can tell failure modes apart without parsing text.

use thiserror::Error;

/// Main error type for dispatch operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// Detection found nothing and no explicit action was given
    #[error("nothing found to build in this directory")]
    NothingToBuild,

    /// Explicit action argument is not in the recognized set
    #[error("unknown build system specified: '{0}'")]
    UnknownAction(String),

    /// Required marker file is absent for the chosen action
    #[error("{file} does not exist")]
    MissingPrerequisite {
        action: &'static str,
        file: &'static str,
    },

    /// Action requires a different operating system family
    #[error("the {action} build system requires {required}")]
    PlatformMismatch {
        action: &'static str,
        required: &'static str,
    },

    /// dotnet SDK is not installed or not reachable
    #[error("dotnet SDK is not present")]
    DotnetMissing,

    /// A required external tool could not be invoked at all
    #[error("'{tool}' is not available: {error}")]
    ToolMissing { tool: String, error: String },

    /// Installing Cake.Tool failed
    #[error("Cake.Tool is not present and could not be installed")]
    ToolInstallFailed,

    /// `dotnet tool restore` failed during the self-heal retry
    #[error("dotnet tool restore failed: {0}")]
    ToolRestoreFailed(String),

    /// External tool ran but returned a failure status
    #[error("{command} failed{}", code_suffix(.code))]
    ToolInvocationFailed {
        command: String,
        code: Option<i32>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!(" with exit code {c}"),
        None => String::from(" (terminated by signal)"),
    }
}

impl BuildError {
    /// Stable process exit code per failure class.
    ///
    /// `0` is reserved for success; everything here is non-zero:
    /// - `1` - a tool ran and failed, or an IO error
    /// - `2` - nothing to build
    /// - `3` - unknown action
    /// - `4` - missing prerequisite file
    /// - `5` - platform mismatch
    /// - `6` - required tool (or the dotnet SDK) not installed
    /// - `7` - cake self-heal failed (install or restore)
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::ToolInvocationFailed { .. } | BuildError::Io(_) => 1,
            BuildError::NothingToBuild => 2,
            BuildError::UnknownAction(_) => 3,
            BuildError::MissingPrerequisite { .. } => 4,
            BuildError::PlatformMismatch { .. } => 5,
            BuildError::DotnetMissing | BuildError::ToolMissing { .. } => 6,
            BuildError::ToolInstallFailed | BuildError::ToolRestoreFailed(_) => 7,
        }
    }
}
