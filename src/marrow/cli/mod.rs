/// The clap definition of the command line interface.
pub mod def;

/// Processing of the parsed command line.
pub mod process;

/// Styled printing helpers for the command line.
pub mod printing;

/// The log output format.
pub mod log;
