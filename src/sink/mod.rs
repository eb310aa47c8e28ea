//! Frame persistence.
//!
//! A sink encodes a single frame to a file at a deterministic path and
//! reports success or failure. Save failures are transient: the capture
//! loops log them and continue with the next frame.

mod naming;
mod writer;

pub use naming::{photo_filename, sequence_filename, DEFAULT_PHOTO_DIR, DEFAULT_VIDEO_DIR};
pub use writer::{ensure_directory, FrameWriter};

use crate::capture::Frame;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a frame.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("frame buffer does not match its dimensions")]
    MalformedFrame,
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for captured frames.
///
/// Implemented by [`FrameWriter`] for real output directories; tests
/// substitute failing or recording sinks through the same interface.
pub trait FrameSink {
    /// Encodes `frame` under the file name `name` and returns the path
    /// written.
    fn save(&self, frame: &Frame, name: &str) -> Result<PathBuf, SinkError>;
}
