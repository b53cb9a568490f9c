//! Command-line argument parsing for the `hdrcube` converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::Config;

const LAYOUT_HELP: &str = "\
If no output path is given, the input path + target name is used,
  e.g. image.hdr -> image_HDRI.hdr

Cubemap layouts:
  line: cube sides in a horizontal line
          -X+X-Y+Y-Z+Z
  cube: unfolded cross
          __+Y____
          -X+Z+X-Z
          __-Y____";

/// `hdrcube` command-line arguments.
///
/// Global flags override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(
    name = "hdrcube",
    version,
    about = "HDRI / cubemap converter",
    after_help = LAYOUT_HELP
)]
pub struct CliArgs {
    /// What to convert the input into.
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Worker threads for the conversion (0 = one per core).
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Process pixels on the calling thread only.
    #[arg(long, global = true)]
    pub sequential: bool,
}

/// Conversion target.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert a cubemap in the given layout into an equirectangular HDRI.
    Hdri {
        /// Layout of the input cubemap: `line` or `cube`.
        layout: String,
        /// Input image.
        input: PathBuf,
        /// Output image.
        output: Option<PathBuf>,
    },
    /// Convert an equirectangular HDRI into a `line` cubemap.
    Line {
        /// Input image.
        input: PathBuf,
        /// Output image.
        output: Option<PathBuf>,
    },
    /// Convert an equirectangular HDRI into a `cube` cross cubemap.
    Cube {
        /// Input image.
        input: PathBuf,
        /// Output image.
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Lowercase target name, as typed on the command line.
    #[must_use]
    pub fn target_name(&self) -> &'static str {
        match self {
            Command::Hdri { .. } => "hdri",
            Command::Line { .. } => "line",
            Command::Cube { .. } => "cube",
        }
    }

    /// The input image path.
    #[must_use]
    pub fn input(&self) -> &Path {
        match self {
            Command::Hdri { input, .. }
            | Command::Line { input, .. }
            | Command::Cube { input, .. } => input,
        }
    }

    /// The explicit output path, if one was given.
    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        match self {
            Command::Hdri { output, .. }
            | Command::Line { output, .. }
            | Command::Cube { output, .. } => output.as_deref(),
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(threads) = args.threads {
            self.conversion.threads = threads;
        }
        if args.sequential {
            self.conversion.parallel = false;
        }
    }
}
