//! Projection error types.

use thiserror::Error;

/// Errors returned by buffer construction and the conversion entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The layout name is neither `line` nor `cube`.
    #[error("invalid cubemap layout {0:?}: needs to be either \"line\" or \"cube\"")]
    InvalidLayout(String),

    /// Raw pixel data does not match the declared dimensions.
    #[error("pixel data has {actual} values, expected {expected}")]
    BufferSizeMismatch {
        /// `width * height * channels`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// A pixel buffer must carry at least one channel.
    #[error("pixel buffer needs at least one channel")]
    ZeroChannels,
}
