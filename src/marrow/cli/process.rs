use std::collections::BTreeSet;
use std::env;
use std::io::stdout;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::debug;
use log::info;
use log::trace;
use log::LevelFilter;
use marrow_lib::bailc;
use marrow_lib::config::Config;
use marrow_lib::constants::ERROR_STYLE;
use marrow_lib::constants::PRIMARY_STYLE;
use marrow_lib::constants::SAMPLE_CONFIG;
use marrow_lib::ctx;
use marrow_lib::experiment::Experiment;
use marrow_lib::file_system::FileOperations;
use marrow_lib::file_system::FileSystemInteractor;
use marrow_lib::results::ResultLog;

use super::log::LogTokens;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::def::Command;
use crate::cli::printing::print_version;
use crate::local::run_local;
use crate::status::display_status;

/// This function parses the command that marrow was run with.
pub async fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command).await);
    } else if let Err(e) = process_command(&command).await {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub async fn process_command(cmd: &Cli) -> Result<()> {
    let progress = setup_logging(cmd)?;

    let file_system = FileSystemInteractor { dry_run: cmd.dry };

    match &cmd.command {
        Command::Run(args) => {
            debug!("Reading the config: {:?}", cmd.config);

            let config = Config::from_file(&cmd.config, &file_system)?;
            trace!("The config is: {config:#?}");

            let experiment = Experiment::from_config(&config);
            let log = ResultLog::new(config.results_file.clone());

            let completed = if args.resume && log.exists() {
                let completed = log.load_completed()?;

                info!(
                    "Resuming: {} identities recovered from {:?}",
                    completed.len(),
                    log.path()
                );

                completed
            } else {
                if cmd.dry {
                    info!("Would have initialized the result log {:?} (dry)", log.path());
                } else {
                    debug!("Initializing the result log {:?}", log.path());
                    log.initialize()?;
                }

                BTreeSet::new()
            };

            if cmd.dry {
                let pending = experiment
                    .trials
                    .iter()
                    .filter(|trial| !completed.contains(&trial.identity))
                    .count();

                info!("Would have run {} trials (dry)", pending);
            } else {
                run_local(experiment, &config, completed, args.sequential, &progress).await?;

                info!("Benchmark finished");
                info!(
                    "The results are in {PRIMARY_STYLE}{}{PRIMARY_STYLE:#}",
                    config.results_file.display()
                );
            }
        }

        Command::Status => {
            debug!("Reading the config: {:?}", cmd.config);

            let config = Config::from_file(&cmd.config, &file_system)?;
            let experiment = Experiment::from_config(&config);
            let log = ResultLog::new(config.results_file.clone());

            let records = if log.exists() {
                log.load_records()?
            } else {
                info!("There is no result log at {:?} yet", log.path());
                Vec::new()
            };

            display_status(&mut stdout(), &experiment, &records)?;
        }

        Command::Init(args) => {
            let directory = args.directory.clone().unwrap_or_else(|| PathBuf::from("."));
            let path = directory.join("marrow.toml");

            if path.exists() {
                bailc!(
                    "A configuration already exists", ;
                    "There is a file at {path:?}", ;
                    "Remove it first, or initialize another directory",
                );
            }

            file_system.write_utf8_truncate(&path, SAMPLE_CONFIG)?;

            info!("Wrote a sample configuration to {path:?}");
            info!(
                "Edit it and start the batch with {PRIMARY_STYLE}marrow run{PRIMARY_STYLE:#}"
            );
        }

        Command::Version => print_version(),
    }

    Ok(())
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<MultiProgress> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    let bar = MultiProgress::new();

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        bailc!(
            "Only two levels of verbosity supported (ie. -vv)", ;
            "", ;
            "",
        );
    }

    LogWrapper::new(bar.clone(), log_build.build())
        .try_init()
        .with_context(ctx!(
            "Failed to initialize the command line interface", ;
            "Make sure you are using a supported terminal",
        ))?;

    Ok(bar)
}
