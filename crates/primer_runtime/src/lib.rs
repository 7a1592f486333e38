//! Driver, run configuration, and CLI for Primer.
//!
//! This crate provides:
//! - [`Driver`] - Runs a demonstration program step by step
//! - [`RunConfig`] - Options for a run
//! - [`CliConfig`] - Command-line argument parsing for the `primer` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod driver;

pub use cli::{CliConfig, CliError, parse_args};
pub use config::{GLOBAL_VALUE, Program, RunConfig};
pub use driver::Driver;
