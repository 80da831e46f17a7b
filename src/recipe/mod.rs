//! Recipe module: one build recipe per action, plus the dispatcher
//!
//! A recipe is the fixed sequence of prerequisite checks and external
//! invocations associated with one action. The dispatcher selects the
//! recipe for the resolved action and executes it; there is no fallback
//! between recipes, and the only retry anywhere is the cake self-heal.

pub mod archive;
pub mod cake;
pub mod script;
pub mod tool;
pub mod traits;

pub use archive::{archive_destination, ArchiveRecipe};
pub use cake::{cake_args, install_plan, is_not_found_failure, CakeRecipe, InstallPlan};
pub use script::ScriptRecipe;
pub use tool::{GoRecipe, ToolRecipe};
pub use traits::Recipe;

use crate::error::BuildError;
use crate::probe::EnvironmentProbe;
use crate::resolver::Action;

/// The recipe associated with an action
pub fn recipe_for(action: Action) -> Box<dyn Recipe> {
    match action {
        Action::Ansible => Box::new(ToolRecipe::ansible()),
        Action::Archive => Box::new(ArchiveRecipe),
        Action::Bash => Box::new(ScriptRecipe::bash()),
        Action::Sh => Box::new(ScriptRecipe::sh()),
        Action::Bat => Box::new(ScriptRecipe::bat()),
        Action::Cmd => Box::new(ScriptRecipe::cmd()),
        Action::Cake => Box::new(CakeRecipe),
        Action::Docker => Box::new(ToolRecipe::docker()),
        Action::Go => Box::new(GoRecipe),
        Action::Goreleaser => Box::new(ToolRecipe::goreleaser()),
        Action::Powershell => Box::new(ScriptRecipe::powershell()),
        Action::Pwsh => Box::new(ScriptRecipe::pwsh()),
    }
}

/// Execute the recipe for the resolved action.
///
/// `action` is the resolver's result; `None` means detection found nothing.
/// `target` is forwarded to recipes that accept one.
///
/// # Errors
/// * `BuildError::NothingToBuild` - no action was resolved
/// * anything the selected recipe's `check` or `run` reports
pub fn dispatch(
    action: Option<Action>,
    target: Option<&str>,
    probe: &EnvironmentProbe,
) -> Result<(), BuildError> {
    let Some(action) = action else {
        return Err(BuildError::NothingToBuild);
    };

    let recipe = recipe_for(action);
    tracing::debug!("dispatching action: {}", recipe.name());

    recipe.check(probe)?;
    recipe.run(probe, target)
}
