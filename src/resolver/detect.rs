//! Build-system detection
//!
//! Detection is an explicitly ordered table of (action, predicate) pairs
//! evaluated against the [`EnvironmentProbe`]. The table is walked first to
//! last and the **last** satisfied rule wins, so later entries override
//! earlier ones. The override order is therefore the reverse of the order
//! written below.
//!
//! Script-based actions are additionally gated on interpreter availability:
//! the marker file alone is not enough, the interpreter must have answered
//! the probe's no-op invocation.

use colored::Colorize;

use crate::error::BuildError;
use crate::probe::EnvironmentProbe;
use crate::resolver::Action;

/// A single detection rule: the action selected when the predicate holds
pub struct DetectionRule {
    pub action: Action,
    pub matches: fn(&EnvironmentProbe) -> bool,
}

/// The ordered detection table.
///
/// Later entries override earlier ones (last match wins). Notably:
/// - `go.mod` comes before `dockerfile`, so a containerized Go project
///   builds with docker
/// - `pwsh` is last, so cross-platform PowerShell beats Windows PowerShell
///   when both can run `build.ps1`
pub static DETECTION_RULES: &[DetectionRule] = &[
    DetectionRule {
        action: Action::Ansible,
        matches: |p| p.markers.ansible_cfg,
    },
    DetectionRule {
        action: Action::Go,
        matches: |p| p.markers.go_mod,
    },
    DetectionRule {
        action: Action::Docker,
        matches: |p| p.markers.dockerfile,
    },
    DetectionRule {
        action: Action::Goreleaser,
        matches: |p| p.markers.goreleaser,
    },
    DetectionRule {
        action: Action::Cake,
        matches: |p| p.markers.build_cake,
    },
    DetectionRule {
        action: Action::Sh,
        matches: |p| !p.os.is_windows() && p.markers.build_sh && p.interpreters.sh,
    },
    DetectionRule {
        action: Action::Bash,
        matches: |p| !p.os.is_windows() && p.markers.build_sh && p.interpreters.bash,
    },
    DetectionRule {
        action: Action::Bat,
        matches: |p| p.os.is_windows() && p.markers.build_bat && p.interpreters.cmd,
    },
    DetectionRule {
        action: Action::Cmd,
        matches: |p| p.os.is_windows() && p.markers.build_cmd && p.interpreters.cmd,
    },
    DetectionRule {
        action: Action::Powershell,
        matches: |p| p.os.is_windows() && p.markers.build_ps1 && p.interpreters.powershell,
    },
    DetectionRule {
        action: Action::Pwsh,
        matches: |p| p.markers.build_ps1 && p.interpreters.pwsh,
    },
];

/// Resolve the action for this run.
///
/// An explicit argument (leading hyphens stripped) selects the action
/// directly and bypasses detection entirely; otherwise the detection table
/// is evaluated against the probe.
///
/// # Errors
/// * `BuildError::UnknownAction` - explicit argument not in the recognized set
pub fn resolve(
    explicit: Option<&str>,
    probe: &EnvironmentProbe,
) -> Result<Option<Action>, BuildError> {
    if let Some(arg) = explicit {
        let name = arg.trim_start_matches('-');
        return Action::parse(name).map(Some);
    }

    eprintln!(
        "{}: build system in {}",
        "detecting".cyan(),
        probe.dir.display()
    );

    Ok(detect(probe))
}

/// Evaluate the detection table; last satisfied rule wins
pub fn detect(probe: &EnvironmentProbe) -> Option<Action> {
    let mut selected = None;

    for rule in DETECTION_RULES {
        if (rule.matches)(probe) {
            tracing::debug!("detection rule matched: {}", rule.action);
            selected = Some(rule.action);
        }
    }

    selected
}
