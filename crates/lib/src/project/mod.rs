//! Android project files.
//!
//! Reads the parts of a project the backends need (the launcher activity name,
//! library sub-projects, the ant override-rules file) and writes the build
//! description files each backend regenerates on every build.

mod templates;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::{
  BUILD_GRADLE_FILE, BUILD_XML_FILE, CUSTOM_RULES_FILE, LOCAL_PROPERTIES_FILE, MANIFEST_FILE, OUT_DIR,
  PROJECT_PROPERTIES_FILE, SETTINGS_GRADLE_FILE,
};

pub use templates::{
  GRADLE_DEPS_END, GRADLE_DEPS_START, LOCAL_PROPERTIES_TEMPLATE, PROJECT_NAME_PLACEHOLDER, SETTINGS_GRADLE_HEADER,
};

static ACTIVITY_NAME: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?is)<activity\b.*?android:name\s*=\s*"([^"]*)""#).expect("activity pattern is valid")
});

static LIBRARY_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^\s*android\.library\.reference\.\d+\s*=\s*(.*?)\s*$").expect("library reference pattern is valid")
});

/// Errors that can occur reading or generating project files.
#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("project directory not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },

  #[error("no <activity> with an android:name attribute in {}", path.display())]
  MissingActivity { path: PathBuf },
}

fn read(path: &Path) -> Result<String, ProjectError> {
  fs::read_to_string(path).map_err(|source| ProjectError::Read {
    path: path.to_path_buf(),
    source,
  })
}

fn write(path: &Path, content: &str) -> Result<(), ProjectError> {
  fs::write(path, content).map_err(|source| ProjectError::Write {
    path: path.to_path_buf(),
    source,
  })
}

/// An Android project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
  root: PathBuf,
}

impl Project {
  /// Open the project rooted at `root`.
  ///
  /// # Errors
  ///
  /// Returns [`ProjectError::NotFound`] if `root` is not an existing directory.
  pub fn open(root: &Path) -> Result<Self, ProjectError> {
    if !root.is_dir() {
      return Err(ProjectError::NotFound {
        path: root.to_path_buf(),
      });
    }
    let root = dunce::canonicalize(root).map_err(|source| ProjectError::Read {
      path: root.to_path_buf(),
      source,
    })?;
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// The canonical output directory, `<root>/out`.
  pub fn out_dir(&self) -> PathBuf {
    self.root.join(OUT_DIR)
  }

  /// Whether the project ships ant override rules enabling incremental builds.
  pub fn has_custom_rules(&self) -> bool {
    self.root.join(CUSTOM_RULES_FILE).exists()
  }

  /// Name of the first activity declared in `AndroidManifest.xml`.
  pub fn activity_name(&self) -> Result<String, ProjectError> {
    let path = self.root.join(MANIFEST_FILE);
    let manifest = read(&path)?;
    extract_activity_name(&manifest).ok_or(ProjectError::MissingActivity { path })
  }

  /// Relative paths of library sub-projects listed in `project.properties`.
  ///
  /// A project without `project.properties` has no sub-projects.
  pub fn sub_projects(&self) -> Result<Vec<String>, ProjectError> {
    let path = self.root.join(PROJECT_PROPERTIES_FILE);
    if !path.exists() {
      return Ok(Vec::new());
    }
    Ok(parse_library_references(&read(&path)?))
  }

  /// Write `build.xml` (from the SDK's ant template) into the root and each
  /// sub-project, plus `local.properties` wherever one is missing.
  pub fn write_ant_files(&self, template: &str, sdk_root: &Path) -> Result<(), ProjectError> {
    let build_xml = template.replace(PROJECT_NAME_PLACEHOLDER, &self.activity_name()?);
    let local_properties = LOCAL_PROPERTIES_TEMPLATE.replace("{sdk_dir}", &sdk_root.to_string_lossy());

    let mut dirs = vec![self.root.clone()];
    dirs.extend(self.sub_projects()?.iter().map(|p| self.root.join(p)));

    for dir in dirs {
      write(&dir.join(BUILD_XML_FILE), &build_xml)?;

      let local = dir.join(LOCAL_PROPERTIES_FILE);
      if !local.exists() {
        write(&local, &local_properties)?;
      }
      debug!(dir = %dir.display(), "wrote ant build files");
    }
    Ok(())
  }

  /// Write `settings.gradle` and refresh the sub-project dependency block of
  /// `build.gradle`.
  pub fn write_gradle_files(&self) -> Result<(), ProjectError> {
    let sub_projects = self.sub_projects()?;

    write(
      &self.root.join(SETTINGS_GRADLE_FILE),
      &render_settings_gradle(&sub_projects),
    )?;

    let build_gradle = self.root.join(BUILD_GRADLE_FILE);
    let content = read(&build_gradle)?;
    match replace_gradle_dependencies(&content, &sub_projects) {
      Some(updated) => write(&build_gradle, &updated)?,
      None => warn!(
        path = %build_gradle.display(),
        "no sub-project dependency markers, leaving build.gradle unchanged"
      ),
    }
    Ok(())
  }
}

/// Extract the `android:name` of the first `<activity>` element.
pub fn extract_activity_name(manifest: &str) -> Option<String> {
  ACTIVITY_NAME
    .captures(manifest)
    .and_then(|c| c.get(1))
    .map(|m| m.as_str().to_string())
    .filter(|name| !name.is_empty())
}

/// Collect `android.library.reference.N=<path>` values in file order.
pub fn parse_library_references(properties: &str) -> Vec<String> {
  LIBRARY_REFERENCE
    .captures_iter(properties)
    .filter_map(|c| c.get(1))
    .map(|m| m.as_str().to_string())
    .filter(|path| !path.is_empty())
    .collect()
}

/// Gradle project path for a sub-project directory (`libs/Foo` -> `:libs:Foo`).
pub fn gradle_project_path(sub_project: &str) -> String {
  let trimmed = sub_project.trim_matches(|c| c == '/' || c == '\\');
  format!(":{}", trimmed.replace(['/', '\\'], ":"))
}

pub fn render_settings_gradle(sub_projects: &[String]) -> String {
  let mut out = String::from(SETTINGS_GRADLE_HEADER);
  for p in sub_projects {
    out.push_str(&format!("include \"{}\"\n", gradle_project_path(p)));
  }
  out
}

/// Replace everything between the dependency markers with debug/release
/// project dependencies. Returns `None` if the markers are absent.
pub fn replace_gradle_dependencies(build_gradle: &str, sub_projects: &[String]) -> Option<String> {
  let start = build_gradle.find(GRADLE_DEPS_START)? + GRADLE_DEPS_START.len();
  let end = start + build_gradle[start..].find(GRADLE_DEPS_END)?;

  let mut deps = String::from("\n");
  for p in sub_projects {
    let path = gradle_project_path(p);
    deps.push_str(&format!(
      "    debugCompile project(path: \"{}\", configuration: \"debug\")\n",
      path
    ));
    deps.push_str(&format!(
      "    releaseCompile project(path: \"{}\", configuration: \"release\")\n",
      path
    ));
  }
  deps.push_str("    ");

  Some(format!("{}{}{}", &build_gradle[..start], deps, &build_gradle[end..]))
}
