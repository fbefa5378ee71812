//! Artifact discovery.
//!
//! Build tools do not report where they wrote their packages, so after a build
//! the output directory is listed and the freshest matching files are taken.
//! Candidates are ordered by modification time (newest first); files sharing a
//! timestamp are ordered by path length, shortest first, since the shortest
//! name is usually the primary artifact (`app-debug.apk` over
//! `app-debug-unaligned.apk`).

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScanError {
  /// The directory to scan does not exist.
  #[error("unable to find directory {}, could not locate artifacts", dir.display())]
  NotFound { dir: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },
}

/// A file found during a scan. Only lives for the duration of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
  path: PathBuf,
  modified: SystemTime,
}

fn compare(a: &Candidate, b: &Candidate) -> Ordering {
  b.modified
    .cmp(&a.modified)
    .then_with(|| a.path.as_os_str().len().cmp(&b.path.as_os_str().len()))
}

/// List the files directly inside `dir` accepted by `predicate`, most relevant first.
///
/// The predicate receives the entry's file name. Directories are skipped even
/// when their name matches. Never mutates the file system.
///
/// # Errors
///
/// Returns [`ScanError::NotFound`] if `dir` does not exist.
pub fn scan<P>(dir: &Path, predicate: P) -> Result<Vec<PathBuf>, ScanError>
where
  P: Fn(&str) -> bool,
{
  if !dir.exists() {
    return Err(ScanError::NotFound { dir: dir.to_path_buf() });
  }

  let read_err = |path: &Path| {
    let path = path.to_path_buf();
    move |source| ScanError::Read { path, source }
  };

  let mut candidates = Vec::new();
  for entry in fs::read_dir(dir).map_err(read_err(dir))? {
    let entry = entry.map_err(read_err(dir))?;
    let name = entry.file_name();
    let Some(name) = name.to_str() else {
      continue;
    };
    if !predicate(name) {
      continue;
    }

    let path = entry.path();
    let metadata = fs::metadata(&path).map_err(read_err(&path))?;
    if !metadata.is_file() {
      continue;
    }
    let modified = metadata.modified().map_err(read_err(&path))?;
    candidates.push(Candidate { path, modified });
  }

  candidates.sort_by(compare);
  debug!(dir = %dir.display(), count = candidates.len(), "scanned for artifacts");

  Ok(candidates.into_iter().map(|c| c.path).collect())
}

/// True if `name` ends in `.{extension}`.
pub fn has_extension(name: &str, extension: &str) -> bool {
  Path::new(name).extension().is_some_and(|ext| ext == extension)
}
