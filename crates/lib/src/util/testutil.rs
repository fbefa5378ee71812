//! Test utilities for droidbuild-lib.
//!
//! [`FakeRunner`] stands in for the external build tools. It records every
//! invocation and can be told, per program name, what exit code and stdout to
//! produce and which files to leave behind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::execute::{ExecuteError, Invocation, ToolOutput, ToolRunner};

type Effect = Box<dyn Fn(&Invocation)>;

#[derive(Default)]
struct Behavior {
  code: i32,
  stdout: String,
  effects: Vec<Effect>,
}

#[derive(Default)]
pub struct FakeRunner {
  behaviors: HashMap<String, Behavior>,
  calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
  /// A runner where every program succeeds silently.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_stdout(mut self, program: &str, stdout: &str) -> Self {
    self.behaviors.entry(program.to_string()).or_default().stdout = stdout.to_string();
    self
  }

  pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
    self.behaviors.entry(program.to_string()).or_default().code = code;
    self
  }

  /// Run `effect` whenever `program` is invoked.
  pub fn with_effect(mut self, program: &str, effect: impl Fn(&Invocation) + 'static) -> Self {
    self
      .behaviors
      .entry(program.to_string())
      .or_default()
      .effects
      .push(Box::new(effect));
    self
  }

  /// Every invocation so far, in order.
  pub fn calls(&self) -> Vec<Invocation> {
    self.calls.borrow().clone()
  }

  /// Argument lists of every invocation of `program`, in order.
  pub fn args_of(&self, program: &str) -> Vec<Vec<String>> {
    self
      .calls
      .borrow()
      .iter()
      .filter(|inv| inv.program_name() == program)
      .map(|inv| inv.args.clone())
      .collect()
  }
}

impl ToolRunner for FakeRunner {
  async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ExecuteError> {
    self.calls.borrow_mut().push(invocation.clone());

    let Some(behavior) = self.behaviors.get(&invocation.program_name()) else {
      return Ok(ToolOutput {
        code: Some(0),
        stdout: String::new(),
      });
    };

    for effect in &behavior.effects {
      effect(invocation);
    }

    Ok(ToolOutput {
      code: Some(behavior.code),
      stdout: behavior.stdout.clone(),
    })
  }
}

/// Create an empty file, and any missing parent directories.
pub fn touch(path: &Path) {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(path, b"").unwrap();
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(path, content).unwrap();
}
