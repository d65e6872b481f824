use std::{io, path::PathBuf};
use thiserror::Error;

/// A configuration rejected before any pipeline stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the palette needs at least 2 colors, got {0}")]
    TooFewColors(usize),
    #[error("pixel width must be between 1 and the block size, got {0}")]
    PixWidthOutOfRange(usize),
    #[error("pixel width {0} does not divide the block size")]
    PixWidthNotDivisor(usize),
}

/// Errors returned by the rendering pipeline and its file glue.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Fewer than [`BLOCK_SIZE`](crate::BLOCK_SIZE) bytes were given,
    /// so no block survives truncation.
    #[error("input of {len} bytes is shorter than one block")]
    EmptyInput { len: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
