use std::fmt;

use serde::Serialize;

/// CPU architecture families a device build can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceArch {
  X86,
  Arm,
}

impl DeviceArch {
  /// Classify a device from its `/proc/cpuinfo` text.
  ///
  /// Any mention of Intel (in any case) means x86; everything else is arm.
  pub fn from_cpuinfo(cpuinfo: &str) -> Self {
    if cpuinfo.to_ascii_lowercase().contains("intel") {
      Self::X86
    } else {
      Self::Arm
    }
  }

  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X86 => "x86",
      Self::Arm => "arm",
    }
  }
}

impl fmt::Display for DeviceArch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
