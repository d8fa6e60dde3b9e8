//! The shared architecture of `marrow`: everything the CLI builds on.

/// A struct and related methods for the benchmark configuration,
/// declaratively specifying the trial matrix.
pub mod config;

/// The trial matrix: every (instance, algorithm, seed) combination.
pub mod experiment;

/// Trial outcomes and the durable result log.
pub mod results;

/// Bookkeeping of how many trials have finished.
pub mod progress;

/// Common file operations.
pub mod file_system;

/// The error handling for `marrow`.
pub mod error;

/// Constant values.
pub mod constants;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
