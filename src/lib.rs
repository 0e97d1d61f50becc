mod common;
mod config;
mod error;
pub mod generator;
mod logging;

pub use crate::common::types::*;
pub use crate::common::unicode::{UnicodeTables, NEWLINE_SEED, WHITESPACE_SEED};
pub use crate::config::{GeneratorConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, LOG_ENV_VAR};
pub use crate::error::TablesError;
pub use crate::generator::{generate, run, Generation, RunReport};
pub use crate::logging::{log_disable, log_set_callback, log_set_level, log_set_stderr, LogCallback, LogRecord};
