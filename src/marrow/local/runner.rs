use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Context;
use anyhow::Result;
use futures::future::join_all;
use indicatif::ProgressBar;
use log::error;
use log::info;
use marrow_lib::bailc;
use marrow_lib::ctx;
use marrow_lib::experiment::TrialSpec;
use marrow_lib::progress::ProgressTracker;
use marrow_lib::results::ResultLog;
use marrow_lib::results::TrialResult;
use tokio::sync::Semaphore;
use tokio::task::spawn_blocking;

use crate::executor::TrialExecutor;

/// Serializes result persistence for all workers.
///
/// The mutex guards the whole append-and-advance sequence so that counts
/// reported always match rows persisted. It is never held across a solver
/// invocation.
struct ResultSink {
    /// The durable log, single-writer through the mutex below.
    log: ResultLog,

    /// The progress count, advanced once per recorded result.
    tracker: Mutex<ProgressTracker>,

    /// The progress bar mirroring the tracker.
    bar: ProgressBar,
}

impl ResultSink {
    /// Record one completed trial as a single exclusive section: append
    /// to the log, advance the progress count, and report.
    fn record(&self, result: &TrialResult) -> Result<()> {
        let mut tracker = match self.tracker.lock() {
            Ok(tracker) => tracker,
            Err(_) => {
                bailc!(
                    "The result sink is poisoned", ;
                    "A worker crashed while recording a result", ;
                    "Rerun with --resume to continue from the intact log",
                );
            }
        };

        self.log.append(result)?;

        let snapshot = tracker.advance();

        info!(
            "[{snapshot}] {:<16} -> {:<16} -> {:>6} -> {}",
            result.identity.algorithm,
            result.identity.instance,
            result.identity.seed,
            result.status
        );

        self.bar.set_position(snapshot.completed as u64);

        Ok(())
    }
}

/// Run every pending trial on a pool of at most `pool_size` workers.
///
/// The call returns once all trials have completed. An `Error` outcome of
/// an individual trial never aborts the batch; a failure to persist a
/// result does.
pub async fn run_batch(
    pending: Vec<TrialSpec>,
    executor: TrialExecutor,
    log: ResultLog,
    tracker: ProgressTracker,
    pool_size: usize,
    bar: ProgressBar,
) -> Result<()> {
    let semaphore = Arc::new(Semaphore::new(pool_size));
    let executor = Arc::new(executor);
    let sink = Arc::new(ResultSink {
        log,
        tracker: Mutex::new(tracker),
        bar,
    });

    let task_futures: Vec<_> = pending
        .into_iter()
        .map(|spec| {
            let semaphore = Arc::clone(&semaphore);
            let executor = Arc::clone(&executor);
            let sink = Arc::clone(&sink);

            tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.with_context(ctx!(
                  "The worker pool was closed before all trials ran", ;
                  "",
                ))?;

                match spawn_blocking(move || {
                    let result = executor.execute(&spec);
                    sink.record(&result)
                })
                .await
                {
                    Ok(recorded) => recorded,
                    Err(join) => {
                        error!("Could not join a trial in the multithreaded runtime: {join}");
                        Ok(())
                    }
                }
            })
        })
        .collect();

    for joined in join_all(task_futures).await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(join) => error!("Could not join a worker in the multithreaded runtime: {join}"),
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/runner.rs"]
mod tests;
