use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurntableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No frames found in {0}")]
    EmptySequence(PathBuf),
}

pub type Result<T> = std::result::Result<T, TurntableError>;
