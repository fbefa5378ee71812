//! Build backends.
//!
//! A backend prepares a project for one external build tool, runs it, and
//! reports which artifacts it produced. The set is closed: ant, gradle, and a
//! no-op backend used for `--nobuild`.
//!
//! Every operation is a single attempt. `prepare_environment` regenerates the
//! tool's files on every build and is safe to repeat.
//!
//! # Submodules
//!
//! - [`ant`] - single-apk builds through ant and the SDK's build template
//! - [`gradle`] - one or more apks through the gradle wrapper

pub mod ant;
pub mod gradle;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::build::BuildError;
use crate::consts::ARTIFACT_EXTENSION;
use crate::execute::ToolRunner;
use crate::options::{BackendKind, BuildType};
use crate::platform::env::BuildEnv;
use crate::project::Project;
use crate::scan::{has_extension, scan};

pub use ant::AntBackend;
pub use gradle::GradleBackend;

/// The backend chosen for one invocation.
#[derive(Debug)]
pub enum Backend<'a> {
  Ant(AntBackend<'a>),
  Gradle(GradleBackend<'a>),
  None,
}

impl<'a> Backend<'a> {
  pub fn select(kind: BackendKind, project: &'a Project, env: &'a BuildEnv) -> Self {
    match kind {
      BackendKind::Ant => Backend::Ant(AntBackend::new(project, env)),
      BackendKind::Gradle => Backend::Gradle(GradleBackend::new(project, env)),
      BackendKind::None => Backend::None,
    }
  }

  pub fn kind(&self) -> BackendKind {
    match self {
      Backend::Ant(_) => BackendKind::Ant,
      Backend::Gradle(_) => BackendKind::Gradle,
      Backend::None => BackendKind::None,
    }
  }

  /// Check prerequisites and write the tool's generated files into the project.
  pub async fn prepare_environment(&self, runner: &impl ToolRunner) -> Result<(), BuildError> {
    match self {
      Backend::Ant(ant) => ant.prepare_environment(runner).await,
      Backend::Gradle(gradle) => gradle.prepare_environment(runner).await,
      Backend::None => Ok(()),
    }
  }

  /// Whether a clean must precede every build.
  ///
  /// Ant builds are only incremental when the project carries `custom_rules.xml`.
  pub fn requires_pre_clean(&self) -> bool {
    match self {
      Backend::Ant(ant) => !ant.is_incremental(),
      Backend::Gradle(_) | Backend::None => false,
    }
  }

  /// Run the build and return the paths of the artifacts it produced.
  pub async fn build(&self, runner: &impl ToolRunner, build_type: BuildType) -> Result<Vec<PathBuf>, BuildError> {
    match self {
      Backend::Ant(ant) => ant.build(runner, build_type).await,
      Backend::Gradle(gradle) => gradle.build(runner, build_type).await,
      Backend::None => {
        info!("skipping build");
        Ok(Vec::new())
      }
    }
  }

  pub async fn clean(&self, runner: &impl ToolRunner) -> Result<(), BuildError> {
    match self {
      Backend::Ant(ant) => ant.clean(runner).await,
      Backend::Gradle(gradle) => gradle.clean(runner).await,
      Backend::None => Ok(()),
    }
  }
}

/// Find apks in `dir` built for `build_type`, most relevant first.
///
/// Artifact names carry the build type as a `-debug` / `-release` suffix
/// (`app-debug.apk`, `app-x86-release-unsigned.apk`).
fn find_artifacts(dir: &Path, build_type: BuildType) -> Result<Vec<PathBuf>, BuildError> {
  let marker = format!("-{}", build_type);
  let candidates = scan(dir, |name| has_extension(name, ARTIFACT_EXTENSION) && name.contains(&marker))?;

  if candidates.is_empty() {
    return Err(BuildError::NoArtifact { dir: dir.to_path_buf() });
  }
  Ok(candidates)
}

/// The SDK location, or a prerequisite error naming `tool`.
fn require_sdk<'e>(env: &'e BuildEnv, tool: &'static str) -> Result<&'e Path, BuildError> {
  let sdk = env.sdk_root.as_deref().ok_or_else(|| BuildError::Prerequisite {
    tool,
    message: "ANDROID_HOME is not set".to_string(),
  })?;

  if !sdk.is_dir() {
    return Err(BuildError::Prerequisite {
      tool,
      message: format!("Android SDK not found at {}", sdk.display()),
    });
  }
  Ok(sdk)
}
