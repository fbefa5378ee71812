//! Implementation of the `droidbuild arch` command.
//!
//! Prints a bare `x86` or `arm` so the output can be used from scripts.

use std::path::Path;

use anyhow::{Context, Result};

use super::{orchestrator, runtime};
use crate::output::{OutputFormat, print_json};

pub fn cmd_arch(project: &Path, target: Option<&str>, format: OutputFormat) -> Result<()> {
  let orchestrator = orchestrator(project)?;
  let rt = runtime()?;

  let arch = rt
    .block_on(orchestrator.detect_architecture(target))
    .context("Failed to detect device architecture")?;

  if format.is_json() {
    return print_json(&serde_json::json!({ "target": target, "arch": arch.as_str() }));
  }

  println!("{}", arch);
  Ok(())
}
