//! Core types for roster
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Record / Category: the value type every container check runs over
//! - DropOracle: drop-counting oracle with expectation windows
//! - Tracked / DropToken: values whose teardown the oracle counts
//! - PopulationConfig: how populations are generated
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod oracle;
pub mod record;

pub use config::{PopulationConfig, CONFIG_FILE_NAME, MAX_POPULATION, SEED_ENV_VAR};
pub use error::{Error, OracleError, Result};
pub use oracle::{DropOracle, DropToken, Expectation, Tracked};
pub use record::{Category, Record};
