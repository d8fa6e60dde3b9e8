#![warn(missing_docs)]

//! Marrow runs a batch of solver benchmark trials, one external
//! invocation per (instance, algorithm, seed) combination, and records
//! one result row per trial in a durable CSV log that makes interrupted
//! batches resumable.

/// Running one trial: building the solver invocation and interpreting
/// its response.
pub mod executor;

/// A framework for running the batch on the local machine using a
/// bounded thread-pool executor.
pub mod local;

/// Functionality for displaying the completion of a batch from its
/// result log.
pub mod status;

/// The command line interface and relevant structures.
pub mod cli;

/// Convenience functions for unit tests.
#[cfg(test)]
pub mod test_utils;

/// The main CLI entry-point of the `marrow` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
#[tokio::main]
async fn main() {
    cli::process::parse_command().await;
}
