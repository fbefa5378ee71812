//! Template content for generated project files.

/// Header for a generated `local.properties`.
/// Contains {sdk_dir} placeholder for substitution
pub const LOCAL_PROPERTIES_TEMPLATE: &str = "# This file is automatically generated.
# Do not modify this file -- YOUR CHANGES WILL BE ERASED!
sdk.dir={sdk_dir}
";

/// First lines of a generated `settings.gradle`; one `include` per sub-project follows.
pub const SETTINGS_GRADLE_HEADER: &str = "// GENERATED FILE - DO NOT EDIT
include \":\"
";

/// Placeholder in the SDK's ant `build.template`.
pub const PROJECT_NAME_PLACEHOLDER: &str = "PROJECT_NAME";

/// Markers delimiting the generated dependency block in `build.gradle`.
pub const GRADLE_DEPS_START: &str = "// SUB-PROJECT DEPENDENCIES START";
pub const GRADLE_DEPS_END: &str = "// SUB-PROJECT DEPENDENCIES END";
