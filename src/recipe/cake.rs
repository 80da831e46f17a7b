//! Cake (dotnet) recipe
//!
//! The only self-healing recipe. Before the run it makes sure the Cake
//! local tool is installed (creating a tool manifest when needed); after a
//! failed run it retries exactly once behind `dotnet tool restore`, but
//! only when the failure carries dotnet's "command not found" signature.
//!
//! The run itself is captured and echoed rather than passed through: the
//! self-heal decision needs the output text.

use colored::Colorize;

use crate::error::BuildError;
use crate::executor::{run_captured, run_passthrough, Captured};
use crate::probe::EnvironmentProbe;
use crate::recipe::Recipe;

/// Substring of `dotnet tool list` output when Cake.Tool is installed
const CAKE_TOOL_MARKER: &str = "cake.tool";

/// Local tool manifest created by `dotnet new tool-manifest`
const TOOL_MANIFEST: &str = ".config/dotnet-tools.json";

/// What has to happen before the first `dotnet cake` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPlan {
    /// Tool already listed; run directly
    None,
    /// Manifest present; only the install is needed
    InstallOnly,
    /// No manifest yet; create one, then install
    ManifestAndInstall,
}

/// Decide the install steps from `dotnet tool list` output and manifest state
pub fn install_plan(tool_list: &str, manifest_exists: bool) -> InstallPlan {
    if tool_list.to_lowercase().contains(CAKE_TOOL_MARKER) {
        InstallPlan::None
    } else if manifest_exists {
        InstallPlan::InstallOnly
    } else {
        InstallPlan::ManifestAndInstall
    }
}

/// Whether a failed run carries dotnet's missing-tool signature
///
/// dotnet prints "Could not execute because the specified command or file
/// was not found." when a local tool has not been restored yet.
pub fn is_not_found_failure(output: &str) -> bool {
    let lower = output.to_lowercase();
    lower.contains("command or file was not found") || lower.contains("command not found")
}

/// Cake argument vector: `cake` plus the forwarded target, if any
pub fn cake_args(target: Option<&str>) -> Vec<String> {
    let mut args = vec!["cake".to_string()];
    if let Some(target) = target {
        args.push(format!("--target={target}"));
    }
    args
}

pub struct CakeRecipe;

impl CakeRecipe {
    fn ensure_tool_installed(&self, probe: &EnvironmentProbe) -> Result<(), BuildError> {
        // `dotnet tool list` doubles as the SDK presence check
        let listed = match run_captured(&probe.dir, "dotnet", &["tool", "list"]) {
            Ok(listed) if listed.success => listed,
            _ => return Err(BuildError::DotnetMissing),
        };

        let manifest_exists = probe.dir.join(TOOL_MANIFEST).is_file();
        let plan = install_plan(&listed.output, manifest_exists);

        if plan == InstallPlan::None {
            return Ok(());
        }

        if plan == InstallPlan::ManifestAndInstall {
            let created = run_captured(&probe.dir, "dotnet", &["new", "tool-manifest"])
                .map_err(|_| BuildError::ToolInstallFailed)?;
            if !created.success {
                return Err(BuildError::ToolInstallFailed);
            }
        }

        eprintln!("{}: Cake.Tool", "installing".cyan());
        run_passthrough(&probe.dir, "dotnet", &["tool", "install", "Cake.Tool"])
            .map_err(|_| BuildError::ToolInstallFailed)
    }

    fn run_cake(&self, probe: &EnvironmentProbe, args: &[&str]) -> Result<Captured, BuildError> {
        let result = run_captured(&probe.dir, "dotnet", args)?;
        // Echo what the tool printed; the capture exists only for the
        // self-heal signature match
        print!("{}", result.output);
        Ok(result)
    }
}

impl Recipe for CakeRecipe {
    fn name(&self) -> &'static str {
        "cake"
    }

    fn check(&self, _probe: &EnvironmentProbe) -> Result<(), BuildError> {
        // dotnet cake resolves build.cake itself and reports its absence
        Ok(())
    }

    fn run(&self, probe: &EnvironmentProbe, target: Option<&str>) -> Result<(), BuildError> {
        self.ensure_tool_installed(probe)?;

        let args = cake_args(target);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let first = self.run_cake(probe, &arg_refs)?;
        if first.success {
            return Ok(());
        }

        if !is_not_found_failure(&first.output) {
            return Err(BuildError::ToolInvocationFailed {
                command: format!("dotnet {}", args.join(" ")),
                code: first.code,
            });
        }

        // Self-heal: restore once, retry once
        eprintln!("{}: dotnet tool restore", "restoring".cyan());
        let restore = run_captured(&probe.dir, "dotnet", &["tool", "restore"])?;
        if !restore.success {
            return Err(BuildError::ToolRestoreFailed(
                restore.output.trim().to_string(),
            ));
        }

        let second = self.run_cake(probe, &arg_refs)?;
        if second.success {
            Ok(())
        } else {
            Err(BuildError::ToolInvocationFailed {
                command: format!("dotnet {}", args.join(" ")),
                code: second.code,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOL_LIST_WITH_CAKE: &str = "\
Package Id      Version      Commands
-------------------------------------
cake.tool       4.0.0        dotnet-cake
";

    const TOOL_LIST_WITHOUT_CAKE: &str = "\
Package Id      Version      Commands
-------------------------------------
dotnet-format   5.1.2        dotnet-format
";

    #[test]
    fn test_no_install_when_tool_listed() {
        assert_eq!(
            install_plan(TOOL_LIST_WITH_CAKE, false),
            InstallPlan::None
        );
        assert_eq!(install_plan(TOOL_LIST_WITH_CAKE, true), InstallPlan::None);
    }

    #[test]
    fn test_tool_marker_match_is_case_insensitive() {
        assert_eq!(
            install_plan("Cake.Tool    4.0.0    dotnet-cake", true),
            InstallPlan::None
        );
    }

    #[test]
    fn test_install_only_when_manifest_exists() {
        assert_eq!(
            install_plan(TOOL_LIST_WITHOUT_CAKE, true),
            InstallPlan::InstallOnly
        );
    }

    #[test]
    fn test_manifest_created_before_install() {
        assert_eq!(
            install_plan(TOOL_LIST_WITHOUT_CAKE, false),
            InstallPlan::ManifestAndInstall
        );
        assert_eq!(install_plan("", false), InstallPlan::ManifestAndInstall);
    }

    #[test]
    fn test_not_found_signature_matches_dotnet_wording() {
        let output =
            "Could not execute because the specified command or file was not found.\n";
        assert!(is_not_found_failure(output));
    }

    #[test]
    fn test_not_found_signature_matches_shell_wording() {
        assert!(is_not_found_failure("dotnet-cake: command not found"));
    }

    #[test]
    fn test_ordinary_failure_is_not_a_restore_case() {
        assert!(!is_not_found_failure("Error: Task 'Deploy' failed.\n"));
        assert!(!is_not_found_failure(""));
    }

    #[test]
    fn test_cake_args_without_target() {
        assert_eq!(cake_args(None), vec!["cake".to_string()]);
    }

    #[test]
    fn test_cake_args_with_target() {
        assert_eq!(
            cake_args(Some("Publish")),
            vec!["cake".to_string(), "--target=Publish".to_string()]
        );
    }
}
