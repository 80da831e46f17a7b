//! The closed set of build actions

use crate::error::BuildError;

/// Symbolic identifier of which build system to invoke
///
/// "none" and "unknown" are deliberately not variants: an empty detection
/// result is `Option::None` at the resolver boundary, and an unrecognized
/// explicit argument is a [`BuildError::UnknownAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ansible,
    Archive,
    Bash,
    Sh,
    Bat,
    Cmd,
    Cake,
    Docker,
    Go,
    Goreleaser,
    Powershell,
    Pwsh,
}

impl Action {
    /// Parse an explicit action argument, leading hyphens already stripped
    pub fn parse(name: &str) -> Result<Self, BuildError> {
        match name.to_ascii_lowercase().as_str() {
            "ansible" => Ok(Action::Ansible),
            "archive" => Ok(Action::Archive),
            "bash" => Ok(Action::Bash),
            "sh" => Ok(Action::Sh),
            "bat" => Ok(Action::Bat),
            "cmd" => Ok(Action::Cmd),
            "cake" => Ok(Action::Cake),
            "docker" => Ok(Action::Docker),
            "goreleaser" => Ok(Action::Goreleaser),
            "go" => Ok(Action::Go),
            "powershell" => Ok(Action::Powershell),
            "pwsh" => Ok(Action::Pwsh),
            other => Err(BuildError::UnknownAction(other.to_string())),
        }
    }

    /// Display name, as shown in notices and errors
    pub fn name(self) -> &'static str {
        match self {
            Action::Ansible => "ansible",
            Action::Archive => "archive",
            Action::Bash => "bash",
            Action::Sh => "sh",
            Action::Bat => "bat",
            Action::Cmd => "cmd",
            Action::Cake => "cake",
            Action::Docker => "docker",
            Action::Go => "go",
            Action::Goreleaser => "goreleaser",
            Action::Powershell => "powershell",
            Action::Pwsh => "pwsh",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
