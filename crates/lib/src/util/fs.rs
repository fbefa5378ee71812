//! Filesystem helpers.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Recursively copy `src` into `dst`, creating `dst` and overwriting files.
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
  for entry in WalkDir::new(src) {
    let entry = entry.map_err(io::Error::other)?;
    let relative = entry.path().strip_prefix(src).map_err(io::Error::other)?;
    let target = dst.join(relative);

    if entry.file_type().is_dir() {
      std::fs::create_dir_all(&target)?;
    } else {
      std::fs::copy(entry.path(), &target)?;
    }
  }
  Ok(())
}

/// Remove `path` and everything under it. A missing path is not an error.
pub fn remove_dir_if_exists(path: &Path) -> io::Result<()> {
  match std::fs::remove_dir_all(path) {
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
    other => other,
  }
}
