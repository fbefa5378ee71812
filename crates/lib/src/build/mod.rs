//! Build orchestration.
//!
//! The entry points behind the CLI. A build parses its options, selects a
//! backend, prepares it, cleans when the backend needs it, builds, and copies
//! every produced artifact into the project's `out/` directory:
//!
//! ```text
//! parse -> select -> prepare -> [clean] -> build -> publish to out/
//! ```
//!
//! Every step completes before the next starts. Nothing is written to `out/`
//! unless the build itself succeeded.
//!
//! Publishing copies over files of the same name but never empties `out/`
//! first. Apks from an earlier build whose names differ (a release build
//! followed by a debug build, or a switch between single and per-architecture
//! apks) stay next to the new ones until `run_clean` removes the directory.

mod types;

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

pub use types::*;

use crate::backend::Backend;
use crate::consts::ARTIFACT_EXTENSION;
use crate::execute::{Invocation, ToolRunner, run_tool};
use crate::options::{self, BuildConfiguration, BuildType, Tokens};
use crate::platform::arch::DeviceArch;
use crate::platform::env::BuildEnv;
use crate::project::Project;
use crate::scan::{has_extension, scan};
use crate::util::fs::remove_dir_if_exists;

const ADB: &str = "adb";

const USAGE: &str = "\
Usage: build [--debug | --release] [--ant | --gradle] [--nobuild]

Build options:
    --debug    build the debug apk (default)
    --release  build the release apk
    --ant      build with ant (default, unless ANDROID_BUILD is set)
    --gradle   build with gradle
    --nobuild  skip the build, keep the existing output

Environment:
    ANDROID_BUILD        default backend: ant, gradle or none
    BUILD_MULTIPLE_APKS  build one apk per architecture (gradle)
    ANDROID_HOME         Android SDK location

Artifacts are copied into <project>/out.
";

/// Option synopsis and descriptions for the build options.
pub fn usage() -> &'static str {
  USAGE
}

/// Runs builds for one project.
pub struct Orchestrator<R> {
  project: Project,
  env: BuildEnv,
  runner: R,
}

impl<R: ToolRunner> Orchestrator<R> {
  pub fn new(project: Project, env: BuildEnv, runner: R) -> Self {
    Self { project, env, runner }
  }

  pub fn project(&self) -> &Project {
    &self.project
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Parse option tokens against this environment's default backend.
  pub fn configure<'t>(&self, tokens: impl Into<Tokens<'t>>) -> Result<BuildConfiguration, BuildError> {
    let default_backend = self.env.default_backend()?;
    Ok(options::parse(tokens, default_backend)?)
  }

  /// Build the project and stage the artifacts in `out/`.
  ///
  /// Returns the paths of the copies in `out/`. A `--nobuild` run produces no
  /// artifacts and leaves `out/` as it was.
  pub async fn run<'t>(&self, tokens: impl Into<Tokens<'t>>) -> Result<BuildOutput, BuildError> {
    let config = self.configure(tokens)?;
    let backend = Backend::select(config.backend, &self.project, &self.env);
    info!(backend = %config.backend, build_type = %config.build_type, "starting build");

    backend.prepare_environment(&self.runner).await?;

    if backend.requires_pre_clean() {
      info!("project has no custom rules, cleaning before build");
      backend.clean(&self.runner).await?;
    }

    let produced = backend.build(&self.runner, config.build_type).await?;
    let artifacts = self.publish(&produced)?;

    Ok(BuildOutput { config, artifacts })
  }

  /// Clean the backend's build products and remove `out/`.
  ///
  /// Returns the configuration the clean ran with.
  pub async fn run_clean<'t>(&self, tokens: impl Into<Tokens<'t>>) -> Result<BuildConfiguration, BuildError> {
    let config = self.configure(tokens)?;
    let backend = Backend::select(config.backend, &self.project, &self.env);
    info!(backend = %config.backend, "cleaning");

    backend.prepare_environment(&self.runner).await?;
    backend.clean(&self.runner).await?;

    let out_dir = self.project.out_dir();
    remove_dir_if_exists(&out_dir).map_err(|source| BuildError::Remove {
      path: out_dir.clone(),
      source,
    })?;
    debug!(dir = %out_dir.display(), "removed output directory");

    Ok(config)
  }

  /// Ask an attached device for its CPU architecture.
  ///
  /// `target` is an adb serial; `None` talks to the only attached device.
  pub async fn detect_architecture(&self, target: Option<&str>) -> Result<DeviceArch, BuildError> {
    let mut invocation = Invocation::new(ADB).capture_output();
    if let Some(target) = target {
      invocation = invocation.args(["-s", target]);
    }
    let invocation = invocation.args(["shell", "cat", "/proc/cpuinfo"]);

    let cpuinfo = run_tool(&self.runner, &invocation).await?;
    let arch = DeviceArch::from_cpuinfo(&cpuinfo);
    info!(target = ?target, arch = %arch, "detected device architecture");
    Ok(arch)
  }

  /// Copy `produced` into `out/`, overwriting files of the same name.
  fn publish(&self, produced: &[PathBuf]) -> Result<Vec<PathBuf>, BuildError> {
    if produced.is_empty() {
      return Ok(Vec::new());
    }

    let out_dir = self.project.out_dir();
    fs::create_dir_all(&out_dir).map_err(|source| BuildError::CreateDir {
      path: out_dir.clone(),
      source,
    })?;

    let mut copied = Vec::with_capacity(produced.len());
    for artifact in produced {
      let Some(name) = artifact.file_name() else {
        continue;
      };
      let target = out_dir.join(name);
      fs::copy(artifact, &target).map_err(|source| BuildError::Copy {
        from: artifact.clone(),
        to: target.clone(),
        source,
      })?;
      info!(apk = %target.display(), "staged artifact");
      copied.push(target);
    }
    Ok(copied)
  }
}

/// Find the staged artifact to deploy.
///
/// Candidates are the apks in `out/`, newest first. A non-empty `arch` keeps
/// only names containing it, and the newest remaining candidate is returned.
/// `out/` only ever holds staged build output, so `build_type` does not narrow
/// the choice; it is recorded with the selection.
pub fn get_artifact(project: &Project, build_type: BuildType, arch: Option<&str>) -> Result<PathBuf, BuildError> {
  let out_dir = project.out_dir();
  let arch = arch.filter(|a| !a.is_empty());

  let candidates = scan(&out_dir, |name| {
    has_extension(name, ARTIFACT_EXTENSION) && arch.is_none_or(|a| name.contains(a))
  })?;

  let chosen = candidates
    .into_iter()
    .next()
    .ok_or(BuildError::NoArtifact { dir: out_dir })?;

  info!(apk = %chosen.display(), build_type = %build_type, "using apk");
  Ok(chosen)
}
