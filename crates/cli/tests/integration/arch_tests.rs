//! Device architecture detection tests.

use predicates::prelude::*;

use super::common::TestProject;

const X86_CPUINFO: &str = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Atom(TM) CPU";
const ARM_CPUINFO: &str = "Processor\t: ARMv7 Processor rev 0 (v7l)\nHardware\t: Qualcomm MSM 8974";

#[test]
fn intel_device_is_x86() {
  let project = TestProject::new().with_adb(X86_CPUINFO);

  project
    .droidbuild()
    .arg("arch")
    .assert()
    .success()
    .stdout("x86\n");

  assert_eq!(project.tool_log("adb"), vec!["shell cat /proc/cpuinfo"]);
}

#[test]
fn other_devices_are_arm() {
  let project = TestProject::new().with_adb(ARM_CPUINFO);

  project.droidbuild().arg("arch").assert().success().stdout("arm\n");
}

#[test]
fn target_selects_device() {
  let project = TestProject::new().with_adb(ARM_CPUINFO);

  project
    .droidbuild()
    .args(["-o", "json", "arch", "emulator-5554"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"arch\": \"arm\""));

  assert_eq!(project.tool_log("adb"), vec!["-s emulator-5554 shell cat /proc/cpuinfo"]);
}
