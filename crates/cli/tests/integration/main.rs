//! End-to-end tests driving the `droidbuild` binary against fake build tools.
//!
//! `ant`, `adb` and the SDK's gradle wrapper are replaced by shell scripts
//! that create the files the real tools would.

#![cfg(unix)]

mod arch_tests;
mod build_tests;
mod clean_tests;
mod common;
