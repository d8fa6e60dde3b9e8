use std::path::PathBuf;

use marrow_lib::experiment::Experiment;
use marrow_lib::experiment::TrialIdentity;
use marrow_lib::results::LogRecord;
use marrow_lib::results::TrialStatus;

use crate::status::display_status;
use crate::test_utils::create_sample_config;

fn record(instance: &str, seed: i64, status: TrialStatus) -> LogRecord {
    LogRecord {
        identity: TrialIdentity {
            instance: instance.to_string(),
            algorithm: "rothberg".to_string(),
            seed,
        },
        status,
    }
}

#[test]
fn status_counts_per_algorithm() {
    let config = create_sample_config(PathBuf::from("solver"), PathBuf::from("results.csv"));
    let experiment = Experiment::from_config(&config);

    let records = vec![
        record("good", 29, TrialStatus::Optimal),
        record("bad", 29, TrialStatus::Error),
    ];

    let mut buf = Vec::new();
    let done = display_status(&mut buf, &experiment, &records).unwrap();

    assert_eq!(2, done);

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("ALGORITHM"));
    assert!(text.contains("rothberg"));
    assert!(text.contains("2 of 2 trials completed"));
}

/// Rows of a stale log that no longer match the matrix are ignored.
#[test]
fn stale_rows_are_ignored() {
    let config = create_sample_config(PathBuf::from("solver"), PathBuf::from("results.csv"));
    let experiment = Experiment::from_config(&config);

    let records = vec![
        record("good", 29, TrialStatus::Optimal),
        record("removed-instance", 29, TrialStatus::Error),
    ];

    let mut buf = Vec::new();
    let done = display_status(&mut buf, &experiment, &records).unwrap();

    assert_eq!(1, done);
    assert!(String::from_utf8(buf)
        .unwrap()
        .contains("1 of 2 trials completed"));
}

#[test]
fn empty_log_means_nothing_done() {
    let config = create_sample_config(PathBuf::from("solver"), PathBuf::from("results.csv"));
    let experiment = Experiment::from_config(&config);

    let mut buf = Vec::new();
    let done = display_status(&mut buf, &experiment, &[]).unwrap();

    assert_eq!(0, done);
}
