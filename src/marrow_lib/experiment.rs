use std::path::PathBuf;

use crate::config::Config;

/// The unique key of one trial, used for resume deduplication.
///
/// Two trials with the same identity are the same unit of work: once an
/// identity appears in the result log it is never executed again.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialIdentity {
    /// The name of the problem instance.
    pub instance: String,

    /// The name of the algorithm configuration.
    pub algorithm: String,

    /// The seed passed to the solver.
    pub seed: i64,
}

/// One schedulable unit of work: an identity plus its resolved inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSpec {
    /// The identity of this trial.
    pub identity: TrialIdentity,

    /// The path to the instance file, passed to the solver last.
    pub instance_path: PathBuf,

    /// The algorithm's fixed argument list.
    pub arguments: Vec<String>,
}

/// Describes one benchmark batch: the full trial matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    /// Every (instance, algorithm, seed) combination, exactly once.
    pub trials: Vec<TrialSpec>,
}

impl Experiment {
    /// Build the full matrix from the configuration.
    ///
    /// Enumeration order is seeds, then instances, then algorithms.
    pub fn from_config(config: &Config) -> Experiment {
        let mut trials = Vec::new();

        for seed in &config.seeds {
            for (instance, instance_path) in &config.instances {
                for (algorithm, arguments) in &config.algorithms {
                    trials.push(TrialSpec {
                        identity: TrialIdentity {
                            instance: instance.clone(),
                            algorithm: algorithm.clone(),
                            seed: *seed,
                        },
                        instance_path: instance_path.clone(),
                        arguments: arguments.clone(),
                    });
                }
            }
        }

        Experiment { trials }
    }
}

#[cfg(test)]
#[path = "tests/experiment.rs"]
mod tests;
