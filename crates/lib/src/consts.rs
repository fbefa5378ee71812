//! Fixed names shared across the crate.

/// Canonical output directory, relative to the project root.
pub const OUT_DIR: &str = "out";

/// Extension of every artifact a backend produces.
pub const ARTIFACT_EXTENSION: &str = "apk";

/// Presence of this file at the project root enables incremental ant builds.
pub const CUSTOM_RULES_FILE: &str = "custom_rules.xml";

pub const MANIFEST_FILE: &str = "AndroidManifest.xml";
pub const PROJECT_PROPERTIES_FILE: &str = "project.properties";
pub const LOCAL_PROPERTIES_FILE: &str = "local.properties";
pub const BUILD_XML_FILE: &str = "build.xml";
pub const BUILD_GRADLE_FILE: &str = "build.gradle";
pub const SETTINGS_GRADLE_FILE: &str = "settings.gradle";

/// Selects the default backend when no backend option is given.
pub const ENV_BUILD_BACKEND: &str = "ANDROID_BUILD";

/// Turns on multi-APK (per-architecture) gradle builds.
pub const ENV_MULTIPLE_APKS: &str = "BUILD_MULTIPLE_APKS";

pub const ENV_SDK_HOME: &str = "ANDROID_HOME";
pub const ENV_SDK_ROOT: &str = "ANDROID_SDK_ROOT";
