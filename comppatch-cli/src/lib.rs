//! Binary support library for the `comppatch` CLI.
//!
//! The argument surface and run logic live here so integration tests can
//! drive them without spawning the binary.

pub mod cli;
