//! Build command integration tests.

use std::fs;

use predicates::prelude::*;

use super::common::{TestProject, write};

#[test]
fn ant_debug_build_stages_apk() {
  let project = TestProject::new();

  project
    .droidbuild()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("Built ant debug apk"));

  assert!(project.out_dir().join("HelloWorld-debug.apk").is_file());
  let build_xml = fs::read_to_string(project.root.join("build.xml")).unwrap();
  assert!(build_xml.contains("name=\"HelloWorld\""));
  let local = fs::read_to_string(project.root.join("local.properties")).unwrap();
  assert!(local.contains(&format!("sdk.dir={}", project.sdk.display())));
}

#[test]
fn ant_without_custom_rules_cleans_first() {
  let project = TestProject::new();

  project.droidbuild().args(["build", "--release"]).assert().success();

  let calls: Vec<String> = project
    .tool_log("ant")
    .into_iter()
    .filter(|line| line != "-version")
    .collect();
  assert_eq!(calls.len(), 2);
  assert!(calls[0].starts_with("clean -f"));
  assert!(calls[1].starts_with("release -f"));
  assert!(project.out_dir().join("HelloWorld-release-unsigned.apk").is_file());
}

#[test]
fn ant_with_custom_rules_builds_incrementally() {
  let project = TestProject::new();
  write(&project.root.join("custom_rules.xml"), "<project/>");

  project.droidbuild().args(["build", "--debug"]).assert().success();

  let calls = project.tool_log("ant");
  assert!(calls.iter().all(|line| !line.starts_with("clean")));
  assert!(calls.iter().any(|line| line.contains("-Dout.dir=ant-build")));
  assert!(project.root.join("ant-build/HelloWorld-debug.apk").is_file());
  assert!(!project.root.join("bin").exists());
  assert!(project.out_dir().join("HelloWorld-debug.apk").is_file());
}

#[test]
fn gradle_build_stages_every_apk() {
  let project = TestProject::new();

  project
    .droidbuild()
    .args(["build", "--gradle"])
    .assert()
    .success()
    .stdout(predicate::str::contains("app-x86-debug.apk"))
    .stdout(predicate::str::contains("app-armv7-debug.apk"));

  assert!(project.out_dir().join("app-x86-debug.apk").is_file());
  assert!(project.out_dir().join("app-armv7-debug.apk").is_file());
  assert!(project.root.join("gradlew").is_file());
  assert!(project.root.join("gradle/wrapper/gradle-wrapper.properties").is_file());
  assert!(project.root.join("settings.gradle").is_file());

  let calls = project.tool_log("gradlew");
  assert_eq!(calls.len(), 1);
  assert!(calls[0].starts_with("assembleDebug -b"));
  assert!(calls[0].contains("-x lint"));
}

#[test]
fn backend_from_environment() {
  let project = TestProject::new();

  project
    .droidbuild()
    .env("ANDROID_BUILD", "gradle")
    .args(["build", "--release"])
    .assert()
    .success();

  assert!(project.out_dir().join("app-x86-release-unsigned.apk").is_file());
  assert!(project.tool_log("ant").is_empty());
}

#[test]
fn json_output_lists_artifacts() {
  let project = TestProject::new();

  let output = project
    .droidbuild()
    .args(["-o", "json", "build", "--gradle"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["config"]["backend"], "gradle");
  assert_eq!(json["config"]["build_type"], "debug");
  assert_eq!(json["artifacts"].as_array().unwrap().len(), 2);
}

#[test]
fn nobuild_wins_over_backend_option() {
  let project = TestProject::new();

  project
    .droidbuild()
    .args(["build", "--gradle", "--nobuild"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing built (none backend)"));

  assert!(project.tool_log("gradlew").is_empty());
  assert!(!project.root.join("gradlew").exists());
}

#[test]
fn nobuild_runs_no_tools() {
  let project = TestProject::new();

  project
    .droidbuild()
    .args(["build", "--nobuild"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing built"));

  assert!(project.tool_log("ant").is_empty());
  assert!(!project.out_dir().exists());
  assert!(!project.root.join("build.xml").exists());
}

#[test]
fn manifest_without_activity_exits_with_one() {
  let project = TestProject::new();
  write(&project.root.join("AndroidManifest.xml"), "<manifest/>");

  project
    .droidbuild()
    .arg("build")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("activity"));
}

#[test]
fn missing_sdk_is_reported() {
  let project = TestProject::new();

  project
    .droidbuild()
    .env_remove("ANDROID_HOME")
    .args(["build", "--gradle"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("gradle requirements not met"));
}
