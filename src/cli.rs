//! CLI definition using clap
//!
//! The invocation surface is `buildit [action-or-target] [target]`:
//! - a first argument with a leading hyphen (`-go`, `-cake`) is an explicit
//!   action and bypasses detection
//! - a first argument without one is a build target; detection still runs
//!   and the target is forwarded to recipes that accept one

use clap::Parser;

/// Build-system dispatcher.
///
/// Detects which build tooling applies to the current directory (Ansible,
/// Docker, Go modules, GoReleaser, Cake, shell/batch/PowerShell scripts)
/// and invokes it, or runs the build system named by an explicit
/// `-<action>` argument.
#[derive(Parser, Debug)]
#[command(name = "buildit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Explicit action (-go, -cake, ...) or a build target to forward
    #[arg(allow_hyphen_values = true)]
    pub action_or_target: Option<String>,

    /// Build target forwarded to recipes that accept one
    #[arg(allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// The explicit action argument, when the first positional is a flag
    pub fn explicit_action(&self) -> Option<&str> {
        self.action_or_target
            .as_deref()
            .filter(|arg| arg.starts_with('-'))
    }

    /// The forwarded build target: always the first non-flag positional
    pub fn forwarded_target(&self) -> Option<&str> {
        match self.action_or_target.as_deref() {
            Some(first) if !first.starts_with('-') => Some(first),
            _ => self
                .target
                .as_deref()
                .filter(|target| !target.starts_with('-')),
        }
    }
}
