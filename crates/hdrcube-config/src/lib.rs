//! Configuration for the `hdrcube` converter.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command};
pub use config::{CONFIG_FILE_NAME, Config, ConversionConfig, DebugConfig, OutputConfig};
pub use error::ConfigError;
