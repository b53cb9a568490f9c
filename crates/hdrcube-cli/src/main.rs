//! `hdrcube`: convert between equirectangular HDRIs and cubemaps.

use std::process::ExitCode;

use clap::Parser;
use hdrcube_cli::{AppDirs, run};
use hdrcube_config::{CliArgs, Config};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match AppDirs::resolve(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    hdrcube_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    if config.conversion.threads > 0
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(config.conversion.threads)
            .build_global()
    {
        warn!("Failed to size thread pool: {e}");
    }

    match run(&args.command, &config) {
        Ok(output) => {
            info!(output = %output.display(), "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
