//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="org.example.hello">
  <application>
    <activity android:name="HelloWorld" android:label="@string/app_name"/>
  </application>
</manifest>
"#;

pub const BUILD_GRADLE: &str = "dependencies {
    // SUB-PROJECT DEPENDENCIES START
    // SUB-PROJECT DEPENDENCIES END
}
";

/// Fake `ant` that answers `-version` and builds into `bin/`, or into the
/// directory named by `-Dout.dir=`.
const FAKE_ANT: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/ant.log"
out=bin
for arg in "$@"; do
  case "$arg" in
    -Dout.dir=*) out="${arg#-Dout.dir=}" ;;
  esac
done
case "$1" in
  -version) echo "Apache Ant(TM) version 1.10.14" ;;
  debug) mkdir -p "$out" && touch "$out/HelloWorld-debug-unaligned.apk" && touch "$out/HelloWorld-debug.apk" ;;
  release) mkdir -p "$out" && touch "$out/HelloWorld-release-unsigned.apk" ;;
  clean) rm -rf "$out" ;;
esac
"#;

/// Fake gradle wrapper producing one apk per architecture.
const FAKE_GRADLEW: &str = r#"#!/bin/sh
echo "$@" >> gradlew.log
case "$1" in
  assembleDebug)
    mkdir -p build/outputs/apk
    touch build/outputs/apk/app-x86-debug.apk build/outputs/apk/app-armv7-debug.apk
    ;;
  assembleRelease)
    mkdir -p build/outputs/apk
    touch build/outputs/apk/app-x86-release-unsigned.apk
    ;;
  clean) rm -rf build/outputs ;;
esac
"#;

/// An Android project next to a fake SDK and a directory of fake tools.
pub struct TestProject {
  pub temp: TempDir,
  pub root: PathBuf,
  pub sdk: PathBuf,
  pub bin: PathBuf,
}

impl TestProject {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let base = dunce::canonicalize(temp.path()).unwrap();
    let root = base.join("app");
    let sdk = base.join("sdk");
    let bin = base.join("bin");

    write(&root.join("AndroidManifest.xml"), MANIFEST);
    write(&root.join("build.gradle"), BUILD_GRADLE);
    write(&sdk.join("tools/lib/build.template"), "<project name=\"PROJECT_NAME\" default=\"help\"/>\n");
    write_script(&sdk.join("tools/templates/gradle/wrapper/gradlew"), FAKE_GRADLEW);
    write(
      &sdk.join("tools/templates/gradle/wrapper/gradle/wrapper/gradle-wrapper.properties"),
      "distributionUrl=https\\://services.gradle.org/distributions/gradle-8.7-all.zip\n",
    );
    write_script(&bin.join("ant"), FAKE_ANT);

    Self { temp, root, sdk, bin }
  }

  /// Install a fake `adb` that prints `cpuinfo` and records its arguments.
  pub fn with_adb(self, cpuinfo: &str) -> Self {
    let script = format!(
      "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/adb.log\"\ncat <<'CPUINFO'\n{}\nCPUINFO\n",
      cpuinfo
    );
    write_script(&self.bin.join("adb"), &script);
    self
  }

  /// Arguments of every call to the fake tool named `tool`, one line per call.
  pub fn tool_log(&self, tool: &str) -> Vec<String> {
    let log = match tool {
      "gradlew" => self.root.join("gradlew.log"),
      other => self.bin.join(format!("{}.log", other)),
    };
    fs::read_to_string(log)
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  pub fn out_dir(&self) -> PathBuf {
    self.root.join("out")
  }

  /// A `droidbuild` command pointed at this project with a clean environment.
  pub fn droidbuild(&self) -> Command {
    let path = format!("{}:{}", self.bin.display(), std::env::var("PATH").unwrap_or_default());
    let mut cmd: Command = cargo_bin_cmd!("droidbuild");
    cmd.env("PATH", path);
    cmd.env("ANDROID_HOME", &self.sdk);
    cmd.env_remove("ANDROID_SDK_ROOT");
    cmd.env_remove("ANDROID_BUILD");
    cmd.env_remove("BUILD_MULTIPLE_APKS");
    cmd.env_remove("RUST_LOG");
    cmd.arg("-C").arg(&self.root);
    cmd
  }
}

pub fn write(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, content).unwrap();
}

fn write_script(path: &Path, content: &str) {
  write(path, content);
  fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
