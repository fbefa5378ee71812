//! Build settings taken from the process environment.
//!
//! The environment is read once into a [`BuildEnv`] which is then passed
//! explicitly to everything that needs it.

use std::path::PathBuf;

use crate::consts::{ENV_BUILD_BACKEND, ENV_MULTIPLE_APKS, ENV_SDK_HOME, ENV_SDK_ROOT};
use crate::options::{BackendKind, ConfigError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
  /// Raw `ANDROID_BUILD` value, if set.
  pub backend_override: Option<String>,
  /// Whether gradle should produce one apk per architecture.
  pub multiple_apks: bool,
  /// Android SDK location.
  pub sdk_root: Option<PathBuf>,
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl BuildEnv {
  /// Read settings from the current process environment.
  ///
  /// `ANDROID_HOME` takes precedence over `ANDROID_SDK_ROOT`.
  pub fn from_env() -> Self {
    Self {
      backend_override: non_empty_var(ENV_BUILD_BACKEND),
      multiple_apks: non_empty_var(ENV_MULTIPLE_APKS).is_some(),
      sdk_root: non_empty_var(ENV_SDK_HOME)
        .or_else(|| non_empty_var(ENV_SDK_ROOT))
        .map(PathBuf::from),
    }
  }

  /// The backend used when no backend option is given.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::InvalidBackendOverride`] if `ANDROID_BUILD` names
  /// no known backend.
  pub fn default_backend(&self) -> Result<BackendKind, ConfigError> {
    match &self.backend_override {
      None => Ok(BackendKind::default()),
      Some(name) => BackendKind::from_name(name).ok_or_else(|| ConfigError::InvalidBackendOverride(name.clone())),
    }
  }
}
