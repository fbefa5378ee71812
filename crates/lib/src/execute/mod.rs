//! External tool execution.
//!
//! Every external program (ant, the gradle wrapper, adb) is started through a
//! [`ToolRunner`], so the rest of the crate never touches `std::process`
//! directly. [`SystemRunner`] spawns real processes; tests substitute a fake.
//!
//! Each invocation is attempted exactly once and awaited to completion. No
//! timeout is applied, so a tool that hangs hangs the caller.

pub mod cmd;

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use cmd::SystemRunner;

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The program could not be started at all.
  #[error("failed to start {program}: {source}")]
  Spawn { program: String, source: std::io::Error },

  /// The program ran and exited unsuccessfully.
  #[error("{program} failed with exit code {code:?}")]
  Failed { program: String, code: Option<i32> },
}

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<String>,
  pub cwd: Option<PathBuf>,
  /// Capture stdout instead of passing it through to the terminal.
  pub capture: bool,
}

impl Invocation {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: None,
      capture: false,
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn current_dir(mut self, dir: &Path) -> Self {
    self.cwd = Some(dir.to_path_buf());
    self
  }

  pub fn capture_output(mut self) -> Self {
    self.capture = true;
    self
  }

  /// Name of the program without its directory, for messages.
  pub fn program_name(&self) -> String {
    self
      .program
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_else(|| self.program.display().to_string())
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// What a finished tool left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
  /// Exit code, `None` if the process was killed by a signal.
  pub code: Option<i32>,
  /// Captured stdout; empty unless the invocation asked for capture.
  pub stdout: String,
}

impl ToolOutput {
  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

/// Runs external programs to completion.
pub trait ToolRunner {
  /// Run `invocation` and wait for it to exit.
  ///
  /// An unsuccessful exit is not an error here; see [`run_tool`].
  fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<ToolOutput, ExecuteError>>;
}

/// Run `invocation`, treating a non-zero exit as [`ExecuteError::Failed`].
///
/// Returns the captured stdout (trimmed) on success.
pub async fn run_tool(runner: &impl ToolRunner, invocation: &Invocation) -> Result<String, ExecuteError> {
  debug!(cmd = %invocation, "running tool");
  let output = runner.run(invocation).await?;

  if !output.success() {
    return Err(ExecuteError::Failed {
      program: invocation.program_name(),
      code: output.code,
    });
  }

  Ok(output.stdout.trim().to_string())
}
