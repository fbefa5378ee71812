//! Build option parsing.
//!
//! Options arrive as a list of `--flag` tokens. They set two independent axes,
//! the build type and the backend, plus `--nobuild` which forces the no-op
//! backend whatever backend was asked for. Each axis may be set once; a second,
//! different token on the same axis is rejected rather than silently winning.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

const FLAG_MARKER: &str = "--";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("build option '{0}' not recognized")]
  Unrecognized(String),

  #[error("build options '{first}' and '{second}' conflict")]
  Conflicting { first: String, second: String },

  #[error("ANDROID_BUILD={0} does not name a build backend (expected ant, gradle or none)")]
  InvalidBackendOverride(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
  #[default]
  Debug,
  Release,
}

impl BuildType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Release => "release",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// The closed set of build backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
  #[default]
  Ant,
  Gradle,
  None,
}

impl BackendKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Ant => "ant",
      Self::Gradle => "gradle",
      Self::None => "none",
    }
  }

  /// Parse a backend name as found in the environment override.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "ant" => Some(Self::Ant),
      "gradle" => Some(Self::Gradle),
      "none" => Some(Self::None),
      _ => None,
    }
  }
}

impl fmt::Display for BackendKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Validated build settings. Immutable once parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildConfiguration {
  pub build_type: BuildType,
  pub backend: BackendKind,
}

/// Tokens accepted by [`parse`], for callers that forward their own argv.
pub enum Tokens<'a> {
  One(&'a str),
  Many(&'a [String]),
}

impl<'a> From<&'a str> for Tokens<'a> {
  fn from(token: &'a str) -> Self {
    Tokens::One(token)
  }
}

impl<'a> From<&'a [String]> for Tokens<'a> {
  fn from(tokens: &'a [String]) -> Self {
    Tokens::Many(tokens)
  }
}

impl<'a> From<&'a Vec<String>> for Tokens<'a> {
  fn from(tokens: &'a Vec<String>) -> Self {
    Tokens::Many(tokens.as_slice())
  }
}

impl<'a> Tokens<'a> {
  fn iter(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match *self {
      Tokens::One(token) => Box::new(std::iter::once(token)),
      Tokens::Many(tokens) => Box::new(tokens.iter().map(String::as_str)),
    }
  }
}

/// One axis being filled in: the value chosen so far and the token that chose it.
struct Slot<'a, T> {
  value: Option<(T, &'a str)>,
}

impl<'a, T: PartialEq + Copy> Slot<'a, T> {
  fn new() -> Self {
    Self { value: None }
  }

  fn set(&mut self, value: T, token: &'a str) -> Result<(), ConfigError> {
    match self.value {
      Some((existing, _)) if existing == value => Ok(()),
      Some((_, first)) => Err(ConfigError::Conflicting {
        first: first.to_string(),
        second: token.to_string(),
      }),
      None => {
        self.value = Some((value, token));
        Ok(())
      }
    }
  }

  fn get(&self) -> Option<T> {
    self.value.map(|(v, _)| v)
  }
}

/// Parse build option tokens into a [`BuildConfiguration`].
///
/// `default_backend` applies when no backend token is present; it normally
/// comes from the `ANDROID_BUILD` override (see [`crate::platform::env::BuildEnv`]).
///
/// Repeating a token is accepted; two different tokens on one axis are a
/// [`ConfigError::Conflicting`]. `--nobuild` overrides any backend token.
pub fn parse<'a>(tokens: impl Into<Tokens<'a>>, default_backend: BackendKind) -> Result<BuildConfiguration, ConfigError> {
  let tokens = tokens.into();
  let mut build_type = Slot::new();
  let mut backend = Slot::new();
  let mut nobuild = false;

  for token in tokens.iter() {
    let Some(flag) = token.strip_prefix(FLAG_MARKER) else {
      return Err(ConfigError::Unrecognized(token.to_string()));
    };

    match flag {
      "debug" => build_type.set(BuildType::Debug, token)?,
      "release" => build_type.set(BuildType::Release, token)?,
      "ant" => backend.set(BackendKind::Ant, token)?,
      "gradle" => backend.set(BackendKind::Gradle, token)?,
      "nobuild" => nobuild = true,
      _ => return Err(ConfigError::Unrecognized(token.to_string())),
    }
  }

  let backend = if nobuild {
    BackendKind::None
  } else {
    backend.get().unwrap_or(default_backend)
  };

  Ok(BuildConfiguration {
    build_type: build_type.get().unwrap_or_default(),
    backend,
  })
}
