use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempdir::TempDir;

use crate::config::Config;
use crate::file_system::FileSystemInteractor;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor { dry_run: false };

/// Write the provided contents to a `marrow.toml` inside a fresh temp dir.
pub fn create_sample_toml(contents: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new("config_folder").expect("A temp folder could not be created.");
    let file_pathbuf = dir.path().join("marrow.toml");

    let mut file = File::create(file_pathbuf.as_path()).expect("A file could not be created.");
    file.write_all(contents.as_bytes())
        .expect("The test file could not be written.");

    (file_pathbuf, dir)
}

/// A small but complete config for matrix and log tests.
pub fn create_sample_config() -> Config {
    let mut instances = BTreeMap::new();
    instances.insert("mkc".to_string(), PathBuf::from("./instances/mkc.mps.gz"));
    instances.insert(
        "sct32".to_string(),
        PathBuf::from("./instances/sct32.mps.gz"),
    );

    let mut algorithms = BTreeMap::new();
    algorithms.insert(
        "cplex-default".to_string(),
        vec!["--heuristic".to_string(), "none".to_string()],
    );
    algorithms.insert(
        "rothberg".to_string(),
        vec!["--heuristic".to_string(), "rothberg".to_string()],
    );

    Config {
        solver: PathBuf::from("../build/itor"),
        results_file: PathBuf::from("results.csv"),
        pool_size: 2,
        instances,
        algorithms,
        seeds: vec![29, 173, 281],
    }
}
