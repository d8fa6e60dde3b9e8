use std::path::PathBuf;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The header row of the result log, one column per persisted field.
pub const RESULTS_HEADER: [&str; 6] = [
    "INSTANCE",
    "ALGORITHM",
    "SEED",
    "STATUS",
    "OBJECTIVE",
    "NODES",
];

/// The flag that passes the seed to the solver, always the first argument.
pub const SEED_FLAG: &str = "--seed";

/// The flag that passes the instance path to the solver, always the last argument.
pub const INSTANCE_FLAG: &str = "--file";

/// The default path of the result log.
pub const RESULTS_FILE_DEFAULT: fn() -> PathBuf = || "./results.csv".into();

/// The default file name of the configuration, relative to the working directory.
pub const CONFIG_DEFAULT: &str = "./marrow.toml";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();

/// The sample configuration written by `marrow init`.
///
/// The algorithm settings and seeds are the ones used in the ITOR
/// heuristic comparison this tool was first built for.
pub const SAMPLE_CONFIG: &str = r#"# Configuration for a marrow benchmark batch.

# The solver binary to invoke once per trial.
solver = "../build/itor"

# Where the CSV result log is written. Every completed trial appends one row;
# rerunning with `marrow run --resume` skips trials already present here.
results_file = "results.csv"

# How many trials may run at the same time.
pool_size = 18

# The seeds used for each repetition of (instance, algorithm).
seeds = [29, 173, 281, 409, 541]

# One entry per problem instance: name = path.
[instances]
mkc = "./instances/mkc.mps.gz"
sct32 = "./instances/sct32.mps.gz"

# One entry per algorithm: name = fixed argument list.
[algorithms]
cplex-default = [
    "--details", "3",
    "--heuristic-trigger-nodes", "50000",
    "--heuristic-proportional-time-limit", "0.5",
    "--submip-nodes-limit", "500",
    "--heuristic", "none",
]
cplex-polishing = [
    "--details", "3",
    "--heuristic-trigger-nodes", "50000",
    "--heuristic-proportional-time-limit", "0.5",
    "--submip-nodes-limit", "500",
    "--heuristic", "cplex-polishing",
]
rothberg = [
    "--details", "3",
    "--heuristic-trigger-nodes", "50000",
    "--heuristic-proportional-time-limit", "0.5",
    "--submip-nodes-limit", "500",
    "--heuristic", "rothberg",
    "--pool-size", "40",
    "--rothberg-recombinations", "40",
    "--rothberg-mutations", "20",
    "--rothberg-fixing-fraction", "0.5",
    "--rothberg-offset-init", "0.2",
    "--rothberg-offset-reduction", "0.25",
    "--rothberg-offset-minimum", "0.01",
]
maravilha = [
    "--details", "3",
    "--heuristic-trigger-nodes", "50000",
    "--heuristic-proportional-time-limit", "0.5",
    "--submip-nodes-limit", "500",
    "--heuristic", "maravilha",
    "--pool-size", "40",
    "--maravilha-iterations", "1",
    "--maravilha-submip-min", "0.00",
    "--maravilha-submip-max", "0.65",
    "--maravilha-offset", "0.45",
]
"#;
