//! Abacus CLI library
//!
//! Command definitions, configuration and handlers behind the `abacus`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, KeysArgs};
pub use config::{CalculatorSettings, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
