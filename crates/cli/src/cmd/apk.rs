//! Implementation of the `droidbuild apk` command.
//!
//! Chooses the staged apk to deploy without running any build.

use std::path::Path;

use anyhow::{Context, Result};

use droidbuild_lib::build::get_artifact;
use droidbuild_lib::options::BuildType;
use droidbuild_lib::project::Project;

use crate::output::{OutputFormat, print_json};

pub fn cmd_apk(project: &Path, release: bool, arch: Option<&str>, format: OutputFormat) -> Result<()> {
  let project = Project::open(project).with_context(|| format!("Failed to open project {}", project.display()))?;
  let build_type = if release { BuildType::Release } else { BuildType::Debug };

  let apk = get_artifact(&project, build_type, arch).context("No apk to deploy")?;

  if format.is_json() {
    return print_json(&serde_json::json!({ "build_type": build_type, "path": apk }));
  }

  println!("{}", apk.display());
  Ok(())
}
