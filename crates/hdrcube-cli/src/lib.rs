//! The `hdrcube` command-line converter.
//!
//! Wires image decoding, the projection crate and output naming together.
//! The binary in `main.rs` only sets up config, logging and the thread pool.

pub mod error;
pub mod io;
pub mod output_path;
pub mod platform;
pub mod run;

pub use error::CliError;
pub use output_path::derive_output_path;
pub use platform::AppDirs;
pub use run::run;
