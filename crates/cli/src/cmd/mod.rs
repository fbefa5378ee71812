mod apk;
mod arch;
mod build;
mod clean;
mod usage;

pub use apk::cmd_apk;
pub use arch::cmd_arch;
pub use build::cmd_build;
pub use clean::cmd_clean;
pub use usage::cmd_usage;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::debug;

use droidbuild_lib::build::Orchestrator;
use droidbuild_lib::execute::SystemRunner;
use droidbuild_lib::platform::env::BuildEnv;
use droidbuild_lib::project::Project;

/// Open the project at `dir` with settings from the environment.
fn orchestrator(dir: &Path) -> Result<Orchestrator<SystemRunner>> {
  let project = Project::open(dir).with_context(|| format!("Failed to open project {}", dir.display()))?;
  let env = BuildEnv::from_env();
  debug!(project = %project.root().display(), ?env, "opened project");
  Ok(Orchestrator::new(project, env, SystemRunner))
}

/// The external tools are driven one at a time, so a single-threaded runtime suffices.
fn runtime() -> Result<Runtime> {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
