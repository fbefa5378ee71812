//! Shared utilities.
//!
//! Common helpers used across the crate, including test doubles.

pub mod fs;

#[cfg(test)]
pub mod testutil;
