//! Implementation of the `droidbuild clean` command.

use std::path::Path;

use anyhow::{Context, Result};

use super::{orchestrator, runtime};
use crate::output::{OutputFormat, print_json, print_success};

pub fn cmd_clean(project: &Path, options: &[String], format: OutputFormat) -> Result<()> {
  let orchestrator = orchestrator(project)?;
  let rt = runtime()?;

  let config = rt.block_on(orchestrator.run_clean(options)).context("Clean failed")?;
  let out_dir = orchestrator.project().out_dir();

  if format.is_json() {
    return print_json(&serde_json::json!({
      "backend": config.backend,
      "removed": out_dir,
    }));
  }

  print_success(&format!("Cleaned {} build, removed {}", config.backend, out_dir.display()));
  Ok(())
}
