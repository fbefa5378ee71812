//! Gradle backend.
//!
//! The gradle wrapper is copied from the SDK on every build, like ant's build
//! template. Lint and verification tasks are always skipped to keep builds
//! fast; which ones depends on whether per-architecture apks are requested.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{find_artifacts, require_sdk};
use crate::build::BuildError;
use crate::consts::BUILD_GRADLE_FILE;
use crate::execute::{Invocation, ToolRunner, run_tool};
use crate::options::BuildType;
use crate::platform::env::BuildEnv;
use crate::project::Project;
use crate::util::fs::{copy_dir_all, remove_dir_if_exists};

const GRADLE: &str = "gradle";

#[cfg(windows)]
const WRAPPER_SCRIPT: &str = "gradlew.bat";
#[cfg(not(windows))]
const WRAPPER_SCRIPT: &str = "gradlew";

/// Tasks skipped when building one apk per architecture.
const MULTI_APK_SKIPPED_TASKS: &[&str] = &[
  "lint",
  "lintVitalX86Release",
  "lintVitalArmv7Release",
  "compileX86ReleaseArtProfile",
  "compileArmv7ReleaseArtProfile",
];

/// Tasks skipped for a single-apk build.
const SINGLE_APK_SKIPPED_TASKS: &[&str] = &["lint", "lintVitalRelease", "compileLint", "copyReleaseLint"];

#[derive(Debug)]
pub struct GradleBackend<'a> {
  project: &'a Project,
  env: &'a BuildEnv,
}

impl<'a> GradleBackend<'a> {
  pub fn new(project: &'a Project, env: &'a BuildEnv) -> Self {
    Self { project, env }
  }

  pub fn skipped_tasks(&self) -> &'static [&'static str] {
    if self.env.multiple_apks {
      MULTI_APK_SKIPPED_TASKS
    } else {
      SINGLE_APK_SKIPPED_TASKS
    }
  }

  /// Arguments for running `task`.
  pub fn args(&self, task: &str) -> Vec<String> {
    let build_gradle = self.project.root().join(BUILD_GRADLE_FILE);
    let mut args = vec![
      task.to_string(),
      "-b".to_string(),
      build_gradle.to_string_lossy().to_string(),
      "-Dorg.gradle.daemon=true".to_string(),
    ];
    for skipped in self.skipped_tasks() {
      args.push("-x".to_string());
      args.push(skipped.to_string());
    }
    args
  }

  /// The wrapper script inside the project.
  pub fn wrapper(&self) -> PathBuf {
    self.project.root().join(WRAPPER_SCRIPT)
  }

  /// Directory gradle writes apks into.
  pub fn output_dir(&self) -> PathBuf {
    self.project.root().join("build").join("outputs").join("apk")
  }

  /// Locate the SDK's wrapper template, failing if the SDK lacks one.
  fn wrapper_template(&self) -> Result<PathBuf, BuildError> {
    let sdk = require_sdk(self.env, GRADLE)?;
    let template = sdk.join("tools").join("templates").join("gradle").join("wrapper");

    if !template.join(WRAPPER_SCRIPT).is_file() {
      return Err(BuildError::Prerequisite {
        tool: GRADLE,
        message: format!("gradle wrapper template not found in {}", template.display()),
      });
    }
    Ok(template)
  }

  fn invocation(&self, task: &str) -> Invocation {
    Invocation::new(self.wrapper())
      .args(self.args(task))
      .current_dir(self.project.root())
  }

  pub async fn prepare_environment(&self, _runner: &impl ToolRunner) -> Result<(), BuildError> {
    let template = self.wrapper_template()?;
    let root = self.project.root();

    copy_file(&template.join(WRAPPER_SCRIPT), &self.wrapper())?;

    let gradle_dir = root.join("gradle");
    let wrapper_dir = gradle_dir.join("wrapper");
    remove_dir_if_exists(&wrapper_dir).map_err(|source| BuildError::Remove {
      path: wrapper_dir.clone(),
      source,
    })?;
    fs::create_dir_all(&gradle_dir).map_err(|source| BuildError::CreateDir {
      path: gradle_dir.clone(),
      source,
    })?;

    let template_wrapper = template.join("gradle").join("wrapper");
    if template_wrapper.is_dir() {
      copy_dir_all(&template_wrapper, &wrapper_dir).map_err(|source| BuildError::Copy {
        from: template_wrapper.clone(),
        to: wrapper_dir.clone(),
        source,
      })?;
    }
    debug!(wrapper = %self.wrapper().display(), "installed gradle wrapper");

    self.project.write_gradle_files()?;
    Ok(())
  }

  /// Build and return every apk matching `build_type`.
  pub async fn build(&self, runner: &impl ToolRunner, build_type: BuildType) -> Result<Vec<PathBuf>, BuildError> {
    let task = match build_type {
      BuildType::Debug => "assembleDebug",
      BuildType::Release => "assembleRelease",
    };
    run_tool(runner, &self.invocation(task)).await?;

    let apks = find_artifacts(&self.output_dir(), build_type)?;
    for apk in &apks {
      info!(apk = %apk.display(), "found apk");
    }
    Ok(apks)
  }

  pub async fn clean(&self, runner: &impl ToolRunner) -> Result<(), BuildError> {
    run_tool(runner, &self.invocation("clean")).await?;
    Ok(())
  }
}

fn copy_file(from: &Path, to: &Path) -> Result<(), BuildError> {
  fs::copy(from, to).map_err(|source| BuildError::Copy {
    from: from.to_path_buf(),
    to: to.to_path_buf(),
    source,
  })?;
  Ok(())
}
