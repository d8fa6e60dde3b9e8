use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use marrow_lib::constants::CONFIG_DEFAULT;

/// Structure of the main command (marrow).
#[derive(Parser, Debug)]
#[command(
    about = "Marrow, a resumable benchmark runner for external solvers",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: Command,

    /// The path to the config file.
    #[arg(short, long, default_value = CONFIG_DEFAULT, global = true)]
    pub config: PathBuf,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dry run, run but don't actually affect anything.
    #[arg(short, long, global = true)]
    pub dry: bool,
}

/// Enum of the top level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the benchmark batch on this computer.
    Run(RunStruct),

    /// Display the completion of the batch recorded in the result log.
    Status,

    /// Write a sample configuration file.
    Init(InitStruct),

    /// Display the version of this program.
    Version,
}

/// Arguments supplied with the `run` command.
#[derive(Args, Debug, Clone, Copy)]
pub struct RunStruct {
    /// Skip trials already present in the result log.
    #[arg(short, long)]
    pub resume: bool,

    /// Force running the trials in sequence rather than concurrently.
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments supplied with the `init` command.
#[derive(Args, Debug, Clone)]
pub struct InitStruct {
    /// The directory in which to write the sample configuration.
    #[arg()]
    pub directory: Option<PathBuf>,
}
