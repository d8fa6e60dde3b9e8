use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use marrow_lib::experiment::Experiment;
use marrow_lib::experiment::TrialIdentity;
use marrow_lib::results::LogRecord;
use marrow_lib::results::TrialStatus;

use crate::cli::printing::format_table;

/// Per-algorithm completion counts derived from the result log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AlgorithmStatus {
    /// Trials of this algorithm with a row in the log.
    done: usize,

    /// Trials of this algorithm that resolved to `Error`.
    errors: usize,

    /// Trials of this algorithm in the full matrix.
    total: usize,
}

/// Display the completion of the batch, one table row per algorithm,
/// and return how many trials of the matrix have completed.
///
/// Log rows whose identity is not part of the matrix (for example after
/// the configuration changed) are ignored.
pub fn display_status(
    w: &mut impl Write,
    experiment: &Experiment,
    records: &[LogRecord],
) -> Result<usize> {
    let completed: BTreeSet<&TrialIdentity> =
        records.iter().map(|record| &record.identity).collect();

    let matrix: BTreeSet<&TrialIdentity> = experiment
        .trials
        .iter()
        .map(|trial| &trial.identity)
        .collect();

    let mut per_algorithm: BTreeMap<&str, AlgorithmStatus> = BTreeMap::new();

    for trial in &experiment.trials {
        let entry = per_algorithm
            .entry(trial.identity.algorithm.as_str())
            .or_default();

        entry.total += 1;
        if completed.contains(&trial.identity) {
            entry.done += 1;
        }
    }

    for record in records {
        if record.status == TrialStatus::Error && matrix.contains(&record.identity) {
            if let Some(entry) = per_algorithm.get_mut(record.identity.algorithm.as_str()) {
                entry.errors += 1;
            }
        }
    }

    let mut rows = vec![vec![
        "ALGORITHM".to_string(),
        "DONE".to_string(),
        "ERRORS".to_string(),
        "TOTAL".to_string(),
    ]];

    for (algorithm, entry) in &per_algorithm {
        rows.push(vec![
            algorithm.to_string(),
            entry.done.to_string(),
            entry.errors.to_string(),
            entry.total.to_string(),
        ]);
    }

    writeln!(w, "{}", format_table(rows))?;

    let done = experiment
        .trials
        .iter()
        .filter(|trial| completed.contains(&trial.identity))
        .count();

    writeln!(w, "{} of {} trials completed", done, experiment.trials.len())?;

    Ok(done)
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
