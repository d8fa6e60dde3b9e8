use std::path::PathBuf;
use std::process::Command;

use log::debug;
use marrow_lib::constants::INSTANCE_FLAG;
use marrow_lib::constants::SEED_FLAG;
use marrow_lib::experiment::TrialIdentity;
use marrow_lib::experiment::TrialSpec;
use marrow_lib::results::TrialResult;
use marrow_lib::results::TrialStatus;

/// Runs one trial: builds the solver invocation, executes it, and
/// interprets the response.
#[derive(Debug, Clone)]
pub struct TrialExecutor {
    /// The solver binary invoked once per trial.
    solver: PathBuf,
}

impl TrialExecutor {
    /// An executor invoking the given solver binary.
    pub fn new(solver: PathBuf) -> TrialExecutor {
        TrialExecutor { solver }
    }

    /// The invocation for one trial:
    /// `<solver> --seed <seed> <algorithm args...> --file <instance>`.
    pub fn command(&self, spec: &TrialSpec) -> Command {
        let mut command = Command::new(&self.solver);

        command
            .arg(SEED_FLAG)
            .arg(spec.identity.seed.to_string())
            .args(&spec.arguments)
            .arg(INSTANCE_FLAG)
            .arg(&spec.instance_path);

        command
    }

    /// Run one trial to exactly one result, never failing out of this call.
    ///
    /// A launch failure, a non-zero exit, and unusable output all degrade
    /// to a result with status `Error` and no optional fields. The solver
    /// invocation blocks until the solver terminates on its own; no
    /// additional time limit is imposed here.
    pub fn execute(&self, spec: &TrialSpec) -> TrialResult {
        match self.solve(spec) {
            Some(result) => result,
            None => TrialResult::error(spec.identity.clone()),
        }
    }

    /// The happy path of [execute](TrialExecutor::execute); any `None`
    /// along the way means the `Error` outcome.
    fn solve(&self, spec: &TrialSpec) -> Option<TrialResult> {
        let output = self.command(spec).output().ok()?;

        if !output.status.success() {
            debug!(
                "The solver exited with {} for {:?}",
                output.status, spec.identity
            );
            return None;
        }

        parse_response(
            spec.identity.clone(),
            &String::from_utf8_lossy(&output.stdout),
        )
    }
}

/// Interpret the solver's response line.
///
/// Token layout: `<status> <objective> <_> <nodes> <time>`. The objective
/// is read only for `Optimal` and `Feasible`; nodes and time are read for
/// every status except `Error`. Too few tokens, or a token that does not
/// parse as the expected number, yield `None`.
fn parse_response(identity: TrialIdentity, response: &str) -> Option<TrialResult> {
    let tokens: Vec<&str> = response.split_whitespace().collect();

    let status = TrialStatus::from_token(tokens.first()?);
    if status == TrialStatus::Error {
        return Some(TrialResult::error(identity));
    }

    let nodes = tokens.get(3)?.parse::<u64>().ok()?;
    let solve_time = tokens.get(4)?.parse::<f64>().ok()?;

    let objective = if status.carries_objective() {
        Some(tokens.get(1)?.parse::<f64>().ok()?)
    } else {
        None
    };

    Some(TrialResult {
        identity,
        status,
        objective,
        nodes: Some(nodes),
        solve_time: Some(solve_time),
    })
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
