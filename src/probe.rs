//! Environment probing
//!
//! Gathers every fact detection and dispatch need, exactly once per run:
//! which marker files are present in the project directory, the operating
//! system family, and which shell interpreters can actually be invoked.
//! The probe is plain data afterwards, which keeps the resolver a pure
//! function of its inputs.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Operating system family used for platform gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// Family of the running process
    pub fn current() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == OsFamily::Windows
    }
}

/// Marker files found in the project directory
///
/// Presence/absence is the sole detection signal; file contents are never
/// parsed. A marker only counts when it is a regular file.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerFiles {
    pub ansible_cfg: bool,
    pub dockerfile: bool,
    pub go_mod: bool,
    /// `.goreleaser.yml` or `.goreleaser.yaml`
    pub goreleaser: bool,
    pub build_cake: bool,
    pub build_sh: bool,
    pub build_bat: bool,
    pub build_cmd: bool,
    pub build_ps1: bool,
}

impl MarkerFiles {
    /// Check all marker files in `dir`
    pub fn capture(dir: &Path) -> Self {
        Self {
            ansible_cfg: is_file(dir, "ansible.cfg"),
            dockerfile: is_file(dir, "dockerfile"),
            go_mod: is_file(dir, "go.mod"),
            goreleaser: is_file(dir, ".goreleaser.yml") || is_file(dir, ".goreleaser.yaml"),
            build_cake: is_file(dir, "build.cake"),
            build_sh: is_file(dir, "build.sh"),
            build_bat: is_file(dir, "build.bat"),
            build_cmd: is_file(dir, "build.cmd"),
            build_ps1: is_file(dir, "build.ps1"),
        }
    }
}

/// Shell interpreters that answered a no-op invocation
///
/// Only interpreters a present marker file could actually select are
/// probed; the rest stay `false` without spawning anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreters {
    pub sh: bool,
    pub bash: bool,
    pub cmd: bool,
    pub powershell: bool,
    pub pwsh: bool,
}

impl Interpreters {
    /// Probe the interpreters relevant to the captured markers
    pub fn probe_for(markers: &MarkerFiles, os: OsFamily) -> Self {
        let posix_script = markers.build_sh && !os.is_windows();
        let dos_script = (markers.build_bat || markers.build_cmd) && os.is_windows();

        Self {
            sh: posix_script && interpreter_responds("sh", &["-c", "exit 0"]),
            bash: posix_script && interpreter_responds("bash", &["-c", "exit 0"]),
            cmd: dos_script && interpreter_responds("cmd.exe", &["/C", "exit"]),
            powershell: markers.build_ps1
                && os.is_windows()
                && interpreter_responds("powershell", &["-NoProfile", "-Command", "exit"]),
            pwsh: markers.build_ps1
                && interpreter_responds("pwsh", &["-NoProfile", "-Command", "exit"]),
        }
    }
}

/// Everything the resolver and dispatcher read from the environment
///
/// Constructed once per run and passed by reference; never cached across
/// runs and never mutated.
#[derive(Debug, Clone)]
pub struct EnvironmentProbe {
    /// Project directory the markers were captured from
    pub dir: PathBuf,
    pub os: OsFamily,
    pub markers: MarkerFiles,
    pub interpreters: Interpreters,
}

impl EnvironmentProbe {
    /// Gather all facts for `dir` in one pass
    pub fn capture(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let os = OsFamily::current();
        let markers = MarkerFiles::capture(&dir);
        let interpreters = Interpreters::probe_for(&markers, os);

        tracing::debug!(dir = %dir.display(), ?markers, ?interpreters, "environment captured");

        Self {
            dir,
            os,
            markers,
            interpreters,
        }
    }
}

/// Marker check: must exist and be a regular file, not a directory
fn is_file(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file()
}

/// PATH lookup followed by a no-op invocation of the interpreter
fn interpreter_responds(program: &str, noop_args: &[&str]) -> bool {
    if which::which(program).is_err() {
        tracing::debug!("{program} not found on PATH");
        return false;
    }

    Command::new(program)
        .args(noop_args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_capture_empty_directory() {
        let dir = TempDir::new().unwrap();
        let markers = MarkerFiles::capture(dir.path());

        assert!(!markers.ansible_cfg);
        assert!(!markers.dockerfile);
        assert!(!markers.go_mod);
        assert!(!markers.goreleaser);
        assert!(!markers.build_cake);
        assert!(!markers.build_sh);
        assert!(!markers.build_bat);
        assert!(!markers.build_cmd);
        assert!(!markers.build_ps1);
    }

    #[test]
    fn test_capture_single_markers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/demo\n").unwrap();
        fs::write(dir.path().join("dockerfile"), "FROM scratch\n").unwrap();

        let markers = MarkerFiles::capture(dir.path());

        assert!(markers.go_mod);
        assert!(markers.dockerfile);
        assert!(!markers.ansible_cfg);
    }

    #[test]
    fn test_goreleaser_matches_both_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".goreleaser.yaml"), "").unwrap();
        assert!(MarkerFiles::capture(dir.path()).goreleaser);

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".goreleaser.yml"), "").unwrap();
        assert!(MarkerFiles::capture(dir.path()).goreleaser);
    }

    #[test]
    fn test_directory_is_not_a_marker() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("go.mod")).unwrap();

        let markers = MarkerFiles::capture(dir.path());
        assert!(!markers.go_mod);
    }

    #[test]
    fn test_probe_skips_irrelevant_interpreters() {
        // No markers present: nothing should be probed or reported available
        let markers = MarkerFiles::default();
        let interpreters = Interpreters::probe_for(&markers, OsFamily::current());

        assert!(!interpreters.sh);
        assert!(!interpreters.bash);
        assert!(!interpreters.cmd);
        assert!(!interpreters.powershell);
        assert!(!interpreters.pwsh);
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_finds_posix_shell() {
        let markers = MarkerFiles {
            build_sh: true,
            ..Default::default()
        };
        let interpreters = Interpreters::probe_for(&markers, OsFamily::Unix);

        // sh is required by POSIX; if this box has no sh the rest of the
        // suite is in trouble anyway
        assert!(interpreters.sh);
        // cmd.exe is never probed off Windows
        assert!(!interpreters.cmd);
    }

    #[cfg(unix)]
    #[test]
    fn test_powershell_gated_on_windows() {
        let markers = MarkerFiles {
            build_ps1: true,
            ..Default::default()
        };
        let interpreters = Interpreters::probe_for(&markers, OsFamily::Unix);

        // Windows PowerShell is never considered off Windows, regardless of
        // what is on PATH
        assert!(!interpreters.powershell);
    }

    #[test]
    fn test_environment_probe_capture() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ansible.cfg"), "[defaults]\n").unwrap();

        let probe = EnvironmentProbe::capture(dir.path());

        assert_eq!(probe.dir, dir.path());
        assert!(probe.markers.ansible_cfg);
        assert_eq!(probe.os, OsFamily::current());
    }

    #[test]
    fn test_os_family_current_matches_cfg() {
        let os = OsFamily::current();
        if cfg!(windows) {
            assert!(os.is_windows());
        } else {
            assert!(!os.is_windows());
        }
    }
}
