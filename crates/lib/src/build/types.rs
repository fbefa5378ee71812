//! Types for build orchestration.
//!
//! This module defines the error type shared by the orchestrator and the
//! backends, and the result of a successful build.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::execute::ExecuteError;
use crate::options::{BuildConfiguration, ConfigError};
use crate::project::ProjectError;
use crate::scan::ScanError;

/// Exit status used when an expected artifact or directory is missing.
pub const EXIT_MISSING_ARTIFACT: i32 = 2;

/// Errors that can occur while building, cleaning or locating artifacts.
#[derive(Debug, Error)]
pub enum BuildError {
  /// Bad or conflicting build options.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// A required tool or SDK is missing or misconfigured.
  #[error("{tool} requirements not met: {message}")]
  Prerequisite { tool: &'static str, message: String },

  /// An external tool could not be started or exited unsuccessfully.
  #[error(transparent)]
  Tool(#[from] ExecuteError),

  /// A build reported success but left no artifact behind.
  #[error("no .apk found in {}", dir.display())]
  NoArtifact { dir: PathBuf },

  #[error(transparent)]
  Scan(#[from] ScanError),

  #[error(transparent)]
  Project(#[from] ProjectError),

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: std::io::Error },
}

impl BuildError {
  /// Whether this is a missing-output condition that should end the program.
  pub fn is_fatal(&self) -> bool {
    matches!(
      self,
      BuildError::NoArtifact { .. } | BuildError::Scan(ScanError::NotFound { .. })
    )
  }

  /// Process exit status for this error.
  pub fn exit_code(&self) -> i32 {
    if self.is_fatal() { EXIT_MISSING_ARTIFACT } else { 1 }
  }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutput {
  /// The configuration the build ran with.
  pub config: BuildConfiguration,
  /// Artifacts copied into the output directory, in discovery order.
  pub artifacts: Vec<PathBuf>,
}
