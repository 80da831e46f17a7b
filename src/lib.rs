//! buildit - Build-System Dispatcher
//!
//! Given a project directory, figures out which build tooling applies and
//! invokes it with the right arguments:
//! - **Ansible** - `ansible.cfg` present, runs `ansible-lint .`
//! - **Docker** - `dockerfile` present, runs `docker build .`
//! - **Go modules** - `go.mod` present, runs tidy/vet/build
//! - **GoReleaser** - `.goreleaser.yml`/`.yaml` present, snapshot release
//! - **Cake/.NET** - `dotnet cake`, self-installing and self-healing
//! - **Scripts** - `build.sh`/`build.bat`/`build.cmd`/`build.ps1` through
//!   their interpreters, gated on platform and interpreter availability
//!
//! ## How it works
//!
//! An [`EnvironmentProbe`] gathers every detection fact once per run; the
//! resolver evaluates an ordered rule table against it (last match wins,
//! see [`resolver::DETECTION_RULES`]); the dispatcher runs the recipe for
//! the resolved action. Failures surface as a single [`BuildError`] with a
//! distinct exit code per class.

pub mod cli;
pub mod error;
pub mod executor;
pub mod probe;
pub mod recipe;
pub mod resolver;

pub use cli::Cli;
pub use error::BuildError;
pub use executor::{run_captured, run_passthrough, Captured};
pub use probe::{EnvironmentProbe, Interpreters, MarkerFiles, OsFamily};
pub use recipe::{dispatch, recipe_for, Recipe};
pub use resolver::{detect, resolve, Action, DetectionRule, DETECTION_RULES};
