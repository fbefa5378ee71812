//! Clean command integration tests.

use predicates::prelude::*;

use super::common::{TestProject, write};

#[test]
fn clean_removes_out_dir() {
  let project = TestProject::new();
  project.droidbuild().arg("build").assert().success();
  assert!(project.out_dir().is_dir());

  project
    .droidbuild()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Cleaned ant build"));

  assert!(!project.out_dir().exists());
  assert!(!project.root.join("bin").exists());
}

#[test]
fn clean_without_out_dir_succeeds() {
  let project = TestProject::new();

  project.droidbuild().args(["clean", "--gradle"]).assert().success();

  assert!(project.tool_log("gradlew").iter().any(|line| line.starts_with("clean")));
}

#[test]
fn nobuild_clean_only_removes_out_dir() {
  let project = TestProject::new();
  write(&project.out_dir().join("stale.apk"), "");

  project.droidbuild().args(["clean", "--nobuild"]).assert().success();

  assert!(!project.out_dir().exists());
  assert!(project.tool_log("ant").is_empty());
}
