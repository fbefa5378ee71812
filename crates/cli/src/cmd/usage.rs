//! Implementation of the `droidbuild usage` command.

use droidbuild_lib::build::usage;

pub fn cmd_usage() {
  print!("{}", usage());
}
