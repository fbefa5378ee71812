//! droidbuild-lib: Core types and logic for droidbuild
//!
//! This crate drives an Android project's build through one of a fixed set of
//! backends and stages the produced packages for deployment:
//! - `BuildConfiguration`: the validated result of parsing build option tokens
//! - `Backend`: the closed set of build tools (ant, gradle, none)
//! - `scan`: recency-ordered discovery of produced artifacts
//! - `build`: the orchestration entry points (`run`, `run_clean`, `get_artifact`, ...)
//!
//! Only one build may run against a project at a time. Two concurrent
//! invocations against the same project race on the generated build files and
//! on `out/`; nothing here guards against that.

pub mod backend;
pub mod build;
pub mod consts;
pub mod execute;
pub mod options;
pub mod platform;
pub mod project;
pub mod scan;
pub mod util;
