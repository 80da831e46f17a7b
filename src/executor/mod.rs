//! Process execution module
//!
//! Synchronous, blocking primitives for running external build tools:
//! - Passthrough execution with inherited stdio
//! - Captured execution with combined stdout/stderr

pub mod run;

pub use run::*;
