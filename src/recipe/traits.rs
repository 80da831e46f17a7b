//! Common trait for build recipes
//!
//! Each action maps to exactly one recipe: a precondition check followed by
//! the external invocations for that build system.

use crate::error::BuildError;
use crate::probe::EnvironmentProbe;

/// Trait for build recipes
///
/// `check` runs before anything is spawned; `run` performs the external
/// invocation(s) and blocks until they complete. Both report through
/// [`BuildError`]; the dispatcher never falls back to another recipe on
/// failure.
pub trait Recipe {
    /// Action name, as shown in notices and errors
    fn name(&self) -> &'static str;

    /// Verify marker files and platform before anything is spawned
    ///
    /// # Errors
    /// * `BuildError::PlatformMismatch` - wrong operating system family
    /// * `BuildError::MissingPrerequisite` - required marker file absent
    fn check(&self, probe: &EnvironmentProbe) -> Result<(), BuildError>;

    /// Execute the external tool(s)
    ///
    /// `target` is the forwarded build target; only recipes that accept one
    /// (currently cake) read it.
    ///
    /// # Errors
    /// * `BuildError::ToolMissing` - the tool is not installed/reachable
    /// * `BuildError::ToolInvocationFailed` - the tool exited non-zero
    fn run(&self, probe: &EnvironmentProbe, target: Option<&str>) -> Result<(), BuildError>;
}
