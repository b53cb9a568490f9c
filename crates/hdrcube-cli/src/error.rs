//! Errors surfaced by the `hdrcube` binary.

use std::path::PathBuf;

use hdrcube_projection::ProjectionError;

/// Anything that stops a conversion. Each maps to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input image does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input is too small to hold a single cube face texel.
    #[error("input image {width}x{height} is too small to convert")]
    ImageTooSmall {
        /// Input width in pixels.
        width: u32,
        /// Input height in pixels.
        height: u32,
    },

    /// Decoding or encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Bad layout name or malformed buffer.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Only RGB and RGBA buffers can be written.
    #[error("cannot write an image with {0} channels")]
    UnsupportedChannels(usize),

    /// The OS exposes no configuration directory and none was given.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Filesystem failure outside the image codecs.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
