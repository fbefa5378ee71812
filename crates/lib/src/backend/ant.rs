//! Ant backend.
//!
//! `build.xml` is regenerated from the SDK's template on every build, so the
//! SDK is not needed when the project is created and the newest template is
//! always used. Without `custom_rules.xml` ant cannot build incrementally and
//! every build is preceded by a clean.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{find_artifacts, require_sdk};
use crate::build::BuildError;
use crate::consts::BUILD_XML_FILE;
use crate::execute::{Invocation, ToolRunner, run_tool};
use crate::options::BuildType;
use crate::platform::env::BuildEnv;
use crate::project::{Project, ProjectError};

const ANT: &str = "ant";

/// Output directories used when `custom_rules.xml` is present.
const INCREMENTAL_OUT_DIR: &str = "ant-build";
const INCREMENTAL_GEN_DIR: &str = "ant-gen";

/// Output directory of a plain ant build.
const DEFAULT_OUT_DIR: &str = "bin";

#[derive(Debug)]
pub struct AntBackend<'a> {
  project: &'a Project,
  env: &'a BuildEnv,
}

impl<'a> AntBackend<'a> {
  pub fn new(project: &'a Project, env: &'a BuildEnv) -> Self {
    Self { project, env }
  }

  /// Whether the project's override rules allow building without a clean.
  pub fn is_incremental(&self) -> bool {
    self.project.has_custom_rules()
  }

  /// Arguments for running `target` (`debug`, `release` or `clean`).
  pub fn args(&self, target: &str) -> Vec<String> {
    let build_xml = self.project.root().join(BUILD_XML_FILE);
    let mut args = vec![
      target.to_string(),
      "-f".to_string(),
      build_xml.to_string_lossy().to_string(),
    ];
    if self.is_incremental() {
      args.push(format!("-Dout.dir={}", INCREMENTAL_OUT_DIR));
      args.push(format!("-Dgen.absolute.dir={}", INCREMENTAL_GEN_DIR));
    }
    args
  }

  /// Directory ant writes apks into.
  pub fn output_dir(&self) -> PathBuf {
    let dir = if self.is_incremental() {
      INCREMENTAL_OUT_DIR
    } else {
      DEFAULT_OUT_DIR
    };
    self.project.root().join(dir)
  }

  /// Verify ant runs and the SDK is configured; returns the SDK location.
  async fn check(&self, runner: &impl ToolRunner) -> Result<&'a Path, BuildError> {
    let sdk = require_sdk(self.env, ANT)?;

    run_tool(runner, &Invocation::new(ANT).arg("-version").capture_output())
      .await
      .map_err(|e| BuildError::Prerequisite {
        tool: ANT,
        message: format!("ant is not installed or not on PATH ({})", e),
      })?;

    Ok(sdk)
  }

  fn invocation(&self, target: &str) -> Invocation {
    Invocation::new(ANT)
      .args(self.args(target))
      .current_dir(self.project.root())
  }

  pub async fn prepare_environment(&self, runner: &impl ToolRunner) -> Result<(), BuildError> {
    let sdk = self.check(runner).await?;

    let template_path = sdk.join("tools").join("lib").join("build.template");
    let template = fs::read_to_string(&template_path).map_err(|source| ProjectError::Read {
      path: template_path.clone(),
      source,
    })?;

    self.project.write_ant_files(&template, sdk)?;
    Ok(())
  }

  /// Build and return the single most relevant apk.
  pub async fn build(&self, runner: &impl ToolRunner, build_type: BuildType) -> Result<Vec<PathBuf>, BuildError> {
    self.check(runner).await?;
    run_tool(runner, &self.invocation(build_type.as_str())).await?;

    let candidates = find_artifacts(&self.output_dir(), build_type)?;
    let apk = candidates
      .into_iter()
      .next()
      .ok_or_else(|| BuildError::NoArtifact { dir: self.output_dir() })?;

    info!(apk = %apk.display(), "using apk");
    Ok(vec![apk])
  }

  pub async fn clean(&self, runner: &impl ToolRunner) -> Result<(), BuildError> {
    self.check(runner).await?;
    run_tool(runner, &self.invocation("clean")).await?;
    Ok(())
  }
}
