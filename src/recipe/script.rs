//! Interpreter-driven script recipes
//!
//! Covers the six script actions: `sh`/`bash` (non-Windows), `bat`/`cmd`
//! (Windows), `powershell` (Windows) and `pwsh` (cross-platform). The
//! script runs with inherited stdio so prompts inside it work.

use crate::error::BuildError;
use crate::executor::run_passthrough;
use crate::probe::{EnvironmentProbe, MarkerFiles, OsFamily};
use crate::recipe::Recipe;

/// A build script executed through its interpreter
pub struct ScriptRecipe {
    name: &'static str,
    script: &'static str,
    marker: fn(&MarkerFiles) -> bool,
    /// Platform gate; `None` means the recipe runs on any OS
    required_os: Option<OsFamily>,
    interpreter: &'static str,
    /// Interpreter arguments that come before the script path
    leading_args: &'static [&'static str],
}

impl ScriptRecipe {
    pub fn sh() -> Self {
        Self {
            name: "sh",
            script: "build.sh",
            marker: |m| m.build_sh,
            required_os: Some(OsFamily::Unix),
            interpreter: "sh",
            leading_args: &[],
        }
    }

    pub fn bash() -> Self {
        Self {
            name: "bash",
            script: "build.sh",
            marker: |m| m.build_sh,
            required_os: Some(OsFamily::Unix),
            interpreter: "bash",
            leading_args: &[],
        }
    }

    pub fn bat() -> Self {
        Self {
            name: "bat",
            script: "build.bat",
            marker: |m| m.build_bat,
            required_os: Some(OsFamily::Windows),
            interpreter: "cmd.exe",
            leading_args: &["/C"],
        }
    }

    pub fn cmd() -> Self {
        Self {
            name: "cmd",
            script: "build.cmd",
            marker: |m| m.build_cmd,
            required_os: Some(OsFamily::Windows),
            interpreter: "cmd.exe",
            leading_args: &["/C"],
        }
    }

    pub fn powershell() -> Self {
        Self {
            name: "powershell",
            script: "build.ps1",
            marker: |m| m.build_ps1,
            required_os: Some(OsFamily::Windows),
            interpreter: "powershell",
            leading_args: &["-f"],
        }
    }

    /// Cross-platform PowerShell; the only script recipe without an OS gate
    pub fn pwsh() -> Self {
        Self {
            name: "pwsh",
            script: "build.ps1",
            marker: |m| m.build_ps1,
            required_os: None,
            interpreter: "pwsh",
            leading_args: &["-f"],
        }
    }
}

impl Recipe for ScriptRecipe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, probe: &EnvironmentProbe) -> Result<(), BuildError> {
        // Platform gate first: a missing script on the wrong OS is still a
        // platform problem, not a file problem
        if let Some(required) = self.required_os {
            if probe.os != required {
                return Err(BuildError::PlatformMismatch {
                    action: self.name,
                    required: match required {
                        OsFamily::Windows => "Windows",
                        OsFamily::Unix => "a non-Windows system",
                    },
                });
            }
        }

        if (self.marker)(&probe.markers) {
            Ok(())
        } else {
            Err(BuildError::MissingPrerequisite {
                action: self.name,
                file: self.script,
            })
        }
    }

    fn run(&self, probe: &EnvironmentProbe, _target: Option<&str>) -> Result<(), BuildError> {
        let mut args: Vec<&str> = self.leading_args.to_vec();
        args.push(self.script);
        run_passthrough(&probe.dir, self.interpreter, &args)
    }
}
