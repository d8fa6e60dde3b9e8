use std::collections::BTreeSet;

use anyhow::Result;
use indicatif::MultiProgress;
use log::info;
use marrow_lib::config::Config;
use marrow_lib::experiment::Experiment;
use marrow_lib::experiment::TrialIdentity;
use marrow_lib::experiment::TrialSpec;
use marrow_lib::progress::ProgressTracker;
use marrow_lib::results::ResultLog;

use self::runner::run_batch;
use crate::cli::printing::generate_progress_bar;
use crate::executor::TrialExecutor;

/// The bounded thread pool implementation.
pub mod runner;

/// Run a benchmark batch locally, as specified in the config file.
///
/// Every trial of the matrix whose identity is not in `completed` is
/// scheduled exactly once; the call returns when all of them have
/// finished, one way or the other.
pub async fn run_local(
    experiment: Experiment,
    config: &Config,
    completed: BTreeSet<TrialIdentity>,
    sequential: bool,
    progress: &MultiProgress,
) -> Result<()> {
    let total = experiment.trials.len();

    let pending: Vec<TrialSpec> = experiment
        .trials
        .into_iter()
        .filter(|trial| !completed.contains(&trial.identity))
        .collect();

    let recovered = total - pending.len();

    info!(
        "{} of {} trials already in the log, {} left to run",
        recovered,
        total,
        pending.len()
    );

    let pool_size = if sequential { 1 } else { config.pool_size };

    let bar = progress.add(generate_progress_bar(total as u64)?);
    bar.set_position(recovered as u64);

    let executor = TrialExecutor::new(config.solver.clone());
    let log = ResultLog::new(config.results_file.clone());
    let tracker = ProgressTracker::new(recovered, total);

    run_batch(pending, executor, log, tracker, pool_size, bar.clone()).await?;

    bar.finish();

    Ok(())
}
