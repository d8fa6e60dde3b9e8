use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use marrow_lib::config::Config;
use tempdir::TempDir;

/// Compile a small test program with `rustc` and return the binary path.
pub fn get_compiled_example(contents: &str) -> (PathBuf, TempDir) {
    let tmp = TempDir::new("mock").unwrap();

    let source = tmp.path().join("prog.rs");
    let out = tmp.path().join("prog");

    fs::write(&source, contents).unwrap();

    let mut cmd = Command::new("rustc");
    cmd.arg(source.canonicalize().unwrap()).arg("-o").arg(&out);
    cmd.spawn().unwrap().wait().unwrap();

    (out, tmp)
}

/// A one-algorithm, one-seed config over a solvable and a failing instance.
pub fn create_sample_config(solver: PathBuf, results_file: PathBuf) -> Config {
    let mut instances = BTreeMap::new();
    instances.insert("good".to_string(), PathBuf::from("./instances/good.mps"));
    instances.insert("bad".to_string(), PathBuf::from("./instances/bad.mps"));

    let mut algorithms = BTreeMap::new();
    algorithms.insert(
        "rothberg".to_string(),
        vec!["--heuristic".to_string(), "rothberg".to_string()],
    );

    Config {
        solver,
        results_file,
        pool_size: 2,
        instances,
        algorithms,
        seeds: vec![29],
    }
}
