//! Archive recipe
//!
//! Packs the working directory into a 7z archive one level above it,
//! named after the directory's base name: cwd `/home/user/myproj` ends up
//! in `/home/user/myproj.7z`.

use std::path::Path;

use crate::error::BuildError;
use crate::executor::run_passthrough;
use crate::probe::EnvironmentProbe;
use crate::recipe::Recipe;

pub struct ArchiveRecipe;

/// Archive destination relative to `dir`: always `../<basename>.7z`
pub fn archive_destination(dir: &Path) -> String {
    let base = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    format!("../{base}.7z")
}

impl Recipe for ArchiveRecipe {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn check(&self, _probe: &EnvironmentProbe) -> Result<(), BuildError> {
        // No marker file; any directory can be archived
        Ok(())
    }

    fn run(&self, probe: &EnvironmentProbe, _target: Option<&str>) -> Result<(), BuildError> {
        let destination = archive_destination(&probe.dir);
        run_passthrough(
            &probe.dir,
            "7z",
            &["a", "-t7z", "-mx9", "-y", "-r", &destination, "."],
        )
    }
}
