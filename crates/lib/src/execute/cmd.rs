//! Process-backed tool runner.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::{ExecuteError, Invocation, ToolOutput, ToolRunner};

/// Runs tools as real child processes.
///
/// Non-capturing invocations inherit the terminal so build tool output is
/// visible as it happens. The environment is inherited unchanged; build tools
/// need the user's `PATH`, `JAVA_HOME` and SDK variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
  async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ExecuteError> {
    info!(cmd = %invocation, "executing command");

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    if let Some(cwd) = &invocation.cwd {
      command.current_dir(cwd);
    }

    debug!(program = %invocation.program.display(), working_dir = ?invocation.cwd, "spawning process");

    let spawn_err = |source| ExecuteError::Spawn {
      program: invocation.program_name(),
      source,
    };

    if !invocation.capture {
      let status = command.stdin(Stdio::null()).status().await.map_err(spawn_err)?;
      return Ok(ToolOutput {
        code: status.code(),
        stdout: String::new(),
      });
    }

    let output = command.stdin(Stdio::null()).output().await.map_err(spawn_err)?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if !stderr.is_empty() {
        debug!(stderr = %stderr, "command stderr");
      }
    }

    Ok(ToolOutput {
      code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).to_string(),
    })
  }
}
