//! One conversion, from input file to output file.

use std::path::PathBuf;

use hdrcube_config::{Command, Config};
use hdrcube_projection::{Converter, Layout, PixelBuffer};
use tracing::info;

use crate::error::CliError;
use crate::io::{load_image, save_image};
use crate::output_path::derive_output_path;

enum Target {
    Cubemap(Layout),
    Equirectangular(Layout),
}

/// Execute `command` with the given configuration and return the path
/// written.
///
/// The layout name is validated before the input is touched, so a bad
/// layout never reads or writes any file.
pub fn run(command: &Command, config: &Config) -> Result<PathBuf, CliError> {
    let target = match command {
        Command::Hdri { layout, .. } => Target::Equirectangular(layout.parse()?),
        Command::Line { .. } => Target::Cubemap(Layout::Line),
        Command::Cube { .. } => Target::Cubemap(Layout::Cube),
    };

    let input = command.input();
    if !input.exists() {
        return Err(CliError::InputNotFound(input.to_path_buf()));
    }
    let output = command.output().map_or_else(
        || derive_output_path(input, command.target_name(), &config.output.separator),
        PathBuf::from,
    );

    let source = load_image(input)?;
    let converter = Converter::new().with_parallel(config.conversion.parallel);
    let result = match target {
        Target::Cubemap(layout) => to_cubemap(&converter, &source, layout)?,
        Target::Equirectangular(layout) => to_equirectangular(&converter, &source, layout)?,
    };

    save_image(&output, &result)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        target = command.target_name(),
        "wrote {}x{} image",
        result.width(),
        result.height()
    );
    Ok(output)
}

fn to_cubemap(
    converter: &Converter,
    source: &PixelBuffer,
    layout: Layout,
) -> Result<PixelBuffer, CliError> {
    if source.width() < 4 {
        return Err(too_small(source));
    }
    Ok(converter.to_cubemap(source, layout))
}

fn to_equirectangular(
    converter: &Converter,
    source: &PixelBuffer,
    layout: Layout,
) -> Result<PixelBuffer, CliError> {
    if layout.face_res(source.width(), source.height()) == 0 {
        return Err(too_small(source));
    }
    Ok(converter.to_equirectangular(source, layout))
}

fn too_small(source: &PixelBuffer) -> CliError {
    CliError::ImageTooSmall {
        width: source.width(),
        height: source.height(),
    }
}
