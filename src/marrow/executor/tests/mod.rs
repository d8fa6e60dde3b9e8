use std::path::PathBuf;

use marrow_lib::experiment::TrialIdentity;
use marrow_lib::experiment::TrialSpec;
use marrow_lib::results::TrialResult;
use marrow_lib::results::TrialStatus;

use crate::executor::TrialExecutor;
use crate::test_utils::get_compiled_example;

fn spec(instance: &str, path: &str) -> TrialSpec {
    TrialSpec {
        identity: TrialIdentity {
            instance: instance.to_string(),
            algorithm: "rothberg".to_string(),
            seed: 29,
        },
        instance_path: PathBuf::from(path),
        arguments: vec!["--heuristic".to_string(), "rothberg".to_string()],
    }
}

/// The invocation is `<solver> --seed <seed> <algorithm args> --file <instance>`.
#[test]
fn command_argument_order() {
    let executor = TrialExecutor::new(PathBuf::from("/usr/bin/solver"));
    let command = executor.command(&spec("mkc", "./instances/mkc.mps.gz"));

    assert_eq!("/usr/bin/solver", command.get_program().to_string_lossy());

    let args: Vec<String> = command
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        args,
        [
            "--seed",
            "29",
            "--heuristic",
            "rothberg",
            "--file",
            "./instances/mkc.mps.gz"
        ]
        .map(String::from)
    );
}

#[test]
fn solved_response_is_parsed() {
    let (solver, _tmp) = get_compiled_example(include_str!("test_resources/mock_solver.rs"));
    let executor = TrialExecutor::new(solver);

    let result = executor.execute(&spec("good", "./instances/good.mps"));

    assert_eq!(TrialStatus::Optimal, result.status);
    assert_eq!(Some(42.0), result.objective);
    assert_eq!(Some(10), result.nodes);
    assert_eq!(Some(0.5), result.solve_time);
}

/// Nodes and time are read for a non-solved status, the objective is not.
#[test]
fn unsolved_response_has_no_objective() {
    let (solver, _tmp) = get_compiled_example(include_str!("test_resources/mock_solver.rs"));
    let executor = TrialExecutor::new(solver);

    let result = executor.execute(&spec("unsolved", "./instances/unsolved.mps"));

    assert_eq!(TrialStatus::Infeasible, result.status);
    assert_eq!(None, result.objective);
    assert_eq!(Some(7), result.nodes);
    assert_eq!(Some(0.25), result.solve_time);
}

/// A status this engine does not interpret still yields a full result.
#[test]
fn unknown_status_is_kept_verbatim() {
    let (solver, _tmp) = get_compiled_example(include_str!("test_resources/mock_solver.rs"));
    let executor = TrialExecutor::new(solver);

    let result = executor.execute(&spec("timelimit", "./instances/timelimit.mps"));

    assert_eq!(TrialStatus::Other("TimeLimit".to_string()), result.status);
    assert_eq!(None, result.objective);
    assert_eq!(Some(12), result.nodes);
}

#[test]
fn nonzero_exit_becomes_an_error_result() {
    let (solver, _tmp) = get_compiled_example(include_str!("test_resources/mock_solver.rs"));
    let executor = TrialExecutor::new(solver);

    let trial = spec("bad", "./instances/bad.mps");

    assert_eq!(
        TrialResult::error(trial.identity.clone()),
        executor.execute(&trial)
    );
}

/// Fewer tokens than the layout requires fold into the `Error` outcome.
#[test]
fn short_response_becomes_an_error_result() {
    let (solver, _tmp) = get_compiled_example(include_str!("test_resources/mock_solver.rs"));
    let executor = TrialExecutor::new(solver);

    let trial = spec("weird", "./instances/weird.mps");

    assert_eq!(
        TrialResult::error(trial.identity.clone()),
        executor.execute(&trial)
    );
}

/// A solver that cannot be started at all is contained the same way.
#[test]
fn launch_failure_becomes_an_error_result() {
    let executor = TrialExecutor::new(PathBuf::from("/definitely/not/a/solver"));

    let trial = spec("good", "./instances/good.mps");

    assert_eq!(
        TrialResult::error(trial.identity.clone()),
        executor.execute(&trial)
    );
}
