use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use csv::ReaderBuilder;
use csv::Writer;
use csv::WriterBuilder;
use log::debug;

use crate::constants::RESULTS_HEADER;
use crate::error::ctx;
use crate::experiment::TrialIdentity;

/// The outcome kind reported by the solver, plus the engine's own `Error`.
///
/// Statuses the engine does not interpret are kept verbatim in [Other] so
/// they survive a round trip through the log.
///
/// [Other]: TrialStatus::Other
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialStatus {
    /// The solver proved optimality.
    Optimal,

    /// The solver found a feasible solution.
    Feasible,

    /// The instance is infeasible.
    Infeasible,

    /// The instance is unbounded.
    Unbounded,

    /// The solver reported an error, or the invocation itself failed.
    Error,

    /// A solver-defined status the engine does not interpret.
    Other(String),
}

impl TrialStatus {
    /// Interpret a status token. Every token maps to a status.
    pub fn from_token(token: &str) -> TrialStatus {
        match token {
            "Optimal" => TrialStatus::Optimal,
            "Feasible" => TrialStatus::Feasible,
            "Infeasible" => TrialStatus::Infeasible,
            "Unbounded" => TrialStatus::Unbounded,
            "Error" => TrialStatus::Error,
            other => TrialStatus::Other(other.to_string()),
        }
    }

    /// Whether this status comes with a meaningful objective value.
    pub fn carries_objective(&self) -> bool {
        matches!(self, TrialStatus::Optimal | TrialStatus::Feasible)
    }
}

impl FromStr for TrialStatus {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(TrialStatus::from_token(token))
    }
}

impl Display for TrialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrialStatus::Optimal => write!(f, "Optimal"),
            TrialStatus::Feasible => write!(f, "Feasible"),
            TrialStatus::Infeasible => write!(f, "Infeasible"),
            TrialStatus::Unbounded => write!(f, "Unbounded"),
            TrialStatus::Error => write!(f, "Error"),
            TrialStatus::Other(other) => write!(f, "{other}"),
        }
    }
}

/// The outcome of running one trial, produced exactly once per execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// The identity of the trial this result belongs to.
    pub identity: TrialIdentity,

    /// The outcome kind.
    pub status: TrialStatus,

    /// The objective value, present only for Optimal and Feasible.
    pub objective: Option<f64>,

    /// The number of explored nodes, absent on Error.
    pub nodes: Option<u64>,

    /// The reported solve time in seconds, absent on Error.
    ///
    /// Kept for reporting only; the log has no time column.
    pub solve_time: Option<f64>,
}

impl TrialResult {
    /// The result of a trial whose invocation or output could not be used.
    pub fn error(identity: TrialIdentity) -> TrialResult {
        TrialResult {
            identity,
            status: TrialStatus::Error,
            objective: None,
            nodes: None,
            solve_time: None,
        }
    }

    /// Render this result as one log row, absent fields as empty strings.
    pub fn record(&self) -> [String; 6] {
        [
            self.identity.instance.clone(),
            self.identity.algorithm.clone(),
            self.identity.seed.to_string(),
            self.status.to_string(),
            self.objective.map(|o| o.to_string()).unwrap_or_default(),
            self.nodes.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}

/// One row read back from the log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// The identity recovered from the first three columns.
    pub identity: TrialIdentity,

    /// The status recovered from the fourth column.
    pub status: TrialStatus,
}

/// The durable append-only store of one record per completed trial.
///
/// The file is the sole persisted state of a batch: resuming is defined
/// entirely as "every identity already present is done". The log performs
/// no locking of its own, [append] relies on the caller holding the
/// scheduler's exclusive section.
///
/// [append]: ResultLog::append
#[derive(Debug, Clone)]
pub struct ResultLog {
    /// Where the CSV file lives.
    path: PathBuf,
}

impl ResultLog {
    /// A log at the given path. No file is touched until
    /// [initialize](ResultLog::initialize) or [append](ResultLog::append).
    pub fn new(path: PathBuf) -> ResultLog {
        ResultLog { path }
    }

    /// The path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the underlying file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create or truncate the file and write the fixed header row.
    pub fn initialize(&self) -> Result<()> {
        let mut writer = Writer::from_path(&self.path).with_context(ctx!(
          "Could not create the result log {:?}", self.path;
          "Ensure that the directory exists and is writable",
        ))?;

        writer.write_record(RESULTS_HEADER).with_context(ctx!(
          "Could not write the header of {:?}", self.path;
          "",
        ))?;

        writer.flush().with_context(ctx!(
          "Could not flush the result log {:?}", self.path;
          "",
        ))?;

        Ok(())
    }

    /// Read all rows back, skipping the header and rows that do not parse.
    ///
    /// A row parses when it has at least four columns and an integer seed.
    pub fn load_records(&self) -> Result<Vec<LogRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(ctx!(
              "Could not open the result log {:?}", self.path;
              "Run without --resume to start a fresh log",
            ))?;

        let mut records = Vec::new();

        for row in reader.records() {
            let row = row.with_context(ctx!(
              "Could not read a row of {:?}", self.path;
              "The log seems corrupted beyond individual rows",
            ))?;

            if row.len() < 4 {
                debug!("Skipping a row with {} columns", row.len());
                continue;
            }

            let seed = match row[2].trim().parse::<i64>() {
                Ok(seed) => seed,
                Err(_) => {
                    debug!("Skipping a row with a malformed seed: {:?}", &row[2]);
                    continue;
                }
            };

            records.push(LogRecord {
                identity: TrialIdentity {
                    instance: row[0].to_string(),
                    algorithm: row[1].to_string(),
                    seed,
                },
                status: TrialStatus::from_token(&row[3]),
            });
        }

        Ok(records)
    }

    /// The set of identities already present in the log.
    pub fn load_completed(&self) -> Result<BTreeSet<TrialIdentity>> {
        Ok(self
            .load_records()?
            .into_iter()
            .map(|record| record.identity)
            .collect())
    }

    /// Append one result row and flush it durably before returning.
    pub fn append(&self, result: &TrialResult) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(ctx!(
              "Could not open the result log {:?} for appending", self.path;
              "The log must be initialized before results are recorded",
            ))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&file);

        writer.write_record(result.record()).with_context(ctx!(
          "Could not append a result for {:?}", result.identity;
          "",
        ))?;

        writer.flush().with_context(ctx!(
          "Could not flush the result log {:?}", self.path;
          "",
        ))?;

        drop(writer);

        file.sync_all().with_context(ctx!(
          "Could not persist the result log {:?}", self.path;
          "The row may not have reached the disk",
        ))?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/results.rs"]
mod tests;
