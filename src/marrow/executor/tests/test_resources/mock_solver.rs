use std::env;
use std::process::exit;

fn main() {
    let args: Vec<String> = env::args().collect();

    let file = args
        .iter()
        .position(|arg| arg == "--file")
        .and_then(|index| args.get(index + 1))
        .cloned()
        .unwrap_or_default();

    if file.contains("bad") {
        eprintln!("cannot read the instance");
        exit(1);
    }

    if file.contains("weird") {
        println!("Optimal");
        return;
    }

    if file.contains("unsolved") {
        println!("Infeasible - presolve 7 0.25");
        return;
    }

    if file.contains("timelimit") {
        println!("TimeLimit 40.5 presolve 12 1.5");
        return;
    }

    println!("Optimal 42 branch-and-cut 10 0.5");
}
