//! Common test utilities for buildit integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory with no build files
pub fn empty_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a temporary project directory containing the given marker files
pub fn project_with_markers(markers: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for marker in markers {
        std::fs::write(dir.path().join(marker), "").expect("Failed to write marker");
    }
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates a temporary project with a build.sh carrying the given content
pub fn shell_project(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let script_path = dir.path().join("build.sh");
    std::fs::write(&script_path, content).expect("Failed to write build.sh");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&script_path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script_path, perms).expect("Failed to set permissions");
    }

    let path = dir.path().to_path_buf();
    (dir, path)
}
