//! Command-line argument parsing for the `primer` binary.

use thiserror::Error;

use crate::config::{ParseProgramError, Program, RunConfig};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// `-h` / `--help`.
    pub show_help: bool,
    /// `-V` / `--version`.
    pub show_version: bool,
    /// `--trace`.
    pub trace: bool,
    /// `--seed N`.
    pub seed: Option<u64>,
    /// `--program NAME`.
    pub program: Program,
}

impl CliConfig {
    /// Converts the parsed flags into a run configuration.
    #[must_use]
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig::for_program(self.program)
            .with_seed(self.seed)
            .with_trace(self.trace)
    }
}

/// Errors from parsing command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Option not recognized.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Positional argument given; `primer` takes none.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// Option given without its value.
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    /// Option value failed to parse.
    #[error("invalid {option} value: {value}")]
    InvalidValue {
        /// The option.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Program name not recognized.
    #[error(transparent)]
    Program(#[from] ParseProgramError),
}

/// Parses `args`, where `args[0]` is the binary name.
///
/// # Errors
///
/// Returns a [`CliError`] for unknown options, positional arguments, and
/// missing or malformed option values.
pub fn parse_args(args: &[String]) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace = true,
            "--seed" => {
                let value = iter.next().ok_or(CliError::MissingValue("--seed"))?;
                config.seed = Some(value.parse().map_err(|_| CliError::InvalidValue {
                    option: "--seed",
                    value: value.clone(),
                })?);
            }
            "--program" => {
                let value = iter.next().ok_or(CliError::MissingValue("--program"))?;
                config.program = value.parse()?;
            }
            arg if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            arg => return Err(CliError::UnexpectedArgument(arg.to_string())),
        }
    }

    Ok(config)
}
