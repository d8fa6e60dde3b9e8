use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::bailc;
use crate::constants::PRIMARY_STYLE;
use crate::constants::RESULTS_FILE_DEFAULT;
use crate::error::ctx;
use crate::file_system::FileOperations;

/// A config struct used throughout the `marrow` application.
///
/// One batch is fully described by this struct: the solver to invoke, the
/// problem instances, the algorithm settings to compare, and the seeds for
/// each repetition. The trial matrix is the product of the last three.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The path to the solver binary invoked once per trial.
    pub solver: PathBuf,

    /// The path to the CSV file where results are appended.
    #[serde(default = "RESULTS_FILE_DEFAULT")]
    pub results_file: PathBuf,

    /// How many trials may run concurrently.
    pub pool_size: usize,

    /// The list of problem instances, name to file path.
    pub instances: BTreeMap<String, PathBuf>,

    /// The compared algorithms, name to fixed argument list.
    pub algorithms: BTreeMap<String, Vec<String>>,

    /// The seeds used for each repetition of (instance, algorithm).
    pub seeds: Vec<i64>,
}

impl Config {
    /// Load a `Config` instance from a TOML file at the provided path.
    ///
    /// The returned config is already validated.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Config> {
        let config: Config = toml::from_str(&fs.read_utf8(path)?).with_context(ctx!(
          "Could not parse {path:?}", ;
          "An example configuration can be generated with {PRIMARY_STYLE}marrow init{PRIMARY_STYLE:#}",
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Check the invariants that the rest of the application relies on.
    ///
    /// Duplicate seeds would make two trials share an identity, which
    /// breaks resume deduplication, so they are rejected here.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            bailc!(
                "The pool size is zero", ;
                "No trial could ever be scheduled", ;
                "Set pool_size to at least 1",
            );
        }

        let distinct: BTreeSet<&i64> = self.seeds.iter().collect();
        if distinct.len() != self.seeds.len() {
            bailc!(
                "The seed list contains duplicates", ;
                "Two trials with the same seed would be indistinguishable in the log", ;
                "Remove the repeated seeds from the configuration",
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
