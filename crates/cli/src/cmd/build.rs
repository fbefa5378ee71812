//! Implementation of the `droidbuild build` command.
//!
//! Runs the selected backend and reports the apks staged in `out/`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use super::{orchestrator, runtime};
use crate::output::{OutputFormat, format_bytes, format_elapsed, print_info, print_json, print_stat, print_success, symbols};

pub fn cmd_build(project: &Path, options: &[String], format: OutputFormat) -> Result<()> {
  let orchestrator = orchestrator(project)?;
  let rt = runtime()?;

  let started = Instant::now();
  let output = rt.block_on(orchestrator.run(options)).context("Build failed")?;
  let elapsed = started.elapsed();

  if format.is_json() {
    return print_json(&output);
  }

  if output.artifacts.is_empty() {
    print_info(&format!("Nothing built ({} backend)", output.config.backend));
    return Ok(());
  }

  print_success(&format!(
    "Built {} {} apk in {}",
    output.config.backend,
    output.config.build_type,
    format_elapsed(elapsed)
  ));
  for apk in &output.artifacts {
    let size = std::fs::metadata(apk).map(|m| format_bytes(m.len())).unwrap_or_default();
    print_stat(symbols::ARROW, &format!("{} ({})", apk.display(), size));
  }

  Ok(())
}
