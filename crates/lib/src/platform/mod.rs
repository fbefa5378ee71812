//! Host and device environment.
//!
//! - [`env`] - build settings read from environment variables
//! - [`arch`] - attached device CPU architecture

pub mod arch;
pub mod env;
