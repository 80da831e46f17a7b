//! Plain tool recipes: ansible, docker, goreleaser, and the go sequence
//!
//! These all follow the same shape: one marker-file precondition, then one
//! or more passthrough invocations of the external tool.

use crate::error::BuildError;
use crate::executor::run_passthrough;
use crate::probe::{EnvironmentProbe, MarkerFiles};
use crate::recipe::Recipe;

/// Single-invocation recipe: one marker precondition, one command
pub struct ToolRecipe {
    name: &'static str,
    marker: fn(&MarkerFiles) -> bool,
    marker_file: &'static str,
    program: &'static str,
    args: &'static [&'static str],
}

impl ToolRecipe {
    /// `ansible-lint .` against a directory carrying `ansible.cfg`
    pub fn ansible() -> Self {
        Self {
            name: "ansible",
            marker: |m| m.ansible_cfg,
            marker_file: "ansible.cfg",
            program: "ansible-lint",
            args: &["."],
        }
    }

    /// `docker build .` against a directory carrying `dockerfile`
    pub fn docker() -> Self {
        Self {
            name: "docker",
            marker: |m| m.dockerfile,
            marker_file: "dockerfile",
            program: "docker",
            args: &["build", "."],
        }
    }

    /// Snapshot release without publishing
    pub fn goreleaser() -> Self {
        Self {
            name: "goreleaser",
            marker: |m| m.goreleaser,
            marker_file: ".goreleaser.yml",
            program: "goreleaser",
            args: &["release", "--snapshot", "--clean"],
        }
    }
}

impl Recipe for ToolRecipe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, probe: &EnvironmentProbe) -> Result<(), BuildError> {
        if (self.marker)(&probe.markers) {
            Ok(())
        } else {
            Err(BuildError::MissingPrerequisite {
                action: self.name,
                file: self.marker_file,
            })
        }
    }

    fn run(&self, probe: &EnvironmentProbe, _target: Option<&str>) -> Result<(), BuildError> {
        run_passthrough(&probe.dir, self.program, self.args)
    }
}

/// Go module recipe: tidy, vet, build, short-circuiting on the first failure
pub struct GoRecipe;

impl Recipe for GoRecipe {
    fn name(&self) -> &'static str {
        "go"
    }

    fn check(&self, probe: &EnvironmentProbe) -> Result<(), BuildError> {
        if probe.markers.go_mod {
            Ok(())
        } else {
            Err(BuildError::MissingPrerequisite {
                action: "go",
                file: "go.mod",
            })
        }
    }

    fn run(&self, probe: &EnvironmentProbe, _target: Option<&str>) -> Result<(), BuildError> {
        run_passthrough(&probe.dir, "go", &["mod", "tidy"])?;
        run_passthrough(&probe.dir, "go", &["vet"])?;
        run_passthrough(&probe.dir, "go", &["build", "-a", "."])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Interpreters, OsFamily};
    use std::path::PathBuf;

    fn probe_with(markers: MarkerFiles) -> EnvironmentProbe {
        EnvironmentProbe {
            dir: PathBuf::from("/tmp/project"),
            os: OsFamily::current(),
            markers,
            interpreters: Interpreters::default(),
        }
    }

    #[test]
    fn test_ansible_requires_marker() {
        let recipe = ToolRecipe::ansible();
        let err = recipe.check(&probe_with(MarkerFiles::default())).unwrap_err();

        match err {
            BuildError::MissingPrerequisite { action, file } => {
                assert_eq!(action, "ansible");
                assert_eq!(file, "ansible.cfg");
            }
            other => panic!("Expected MissingPrerequisite, got {other:?}"),
        }
    }

    #[test]
    fn test_ansible_check_passes_with_marker() {
        let recipe = ToolRecipe::ansible();
        let markers = MarkerFiles {
            ansible_cfg: true,
            ..Default::default()
        };
        assert!(recipe.check(&probe_with(markers)).is_ok());
    }

    #[test]
    fn test_docker_requires_dockerfile() {
        let recipe = ToolRecipe::docker();
        let err = recipe.check(&probe_with(MarkerFiles::default())).unwrap_err();
        assert!(err.to_string().contains("dockerfile"));
    }

    #[test]
    fn test_goreleaser_check() {
        let recipe = ToolRecipe::goreleaser();
        let markers = MarkerFiles {
            goreleaser: true,
            ..Default::default()
        };
        assert!(recipe.check(&probe_with(markers)).is_ok());
        assert!(recipe.check(&probe_with(MarkerFiles::default())).is_err());
    }

    #[test]
    fn test_go_requires_go_mod() {
        let recipe = GoRecipe;
        let err = recipe.check(&probe_with(MarkerFiles::default())).unwrap_err();
        assert_eq!(err.exit_code(), 4);

        let markers = MarkerFiles {
            go_mod: true,
            ..Default::default()
        };
        assert!(recipe.check(&probe_with(markers)).is_ok());
    }

    #[test]
    fn test_recipe_names() {
        assert_eq!(ToolRecipe::ansible().name(), "ansible");
        assert_eq!(ToolRecipe::docker().name(), "docker");
        assert_eq!(ToolRecipe::goreleaser().name(), "goreleaser");
        assert_eq!(GoRecipe.name(), "go");
    }
}
