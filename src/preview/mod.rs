//! Live preview and keyboard input.
//!
//! The preview window is the operator's only control surface: frames are
//! shown as they arrive and key presses drive the capture loop. The trait
//! abstraction allows tests to substitute a scripted input source for the
//! real window.

use crate::capture::Frame;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

#[cfg(feature = "display")]
mod window;

#[cfg(feature = "display")]
pub use window::PreviewWindow;

/// Errors that can occur in the preview backend.
///
/// All of them are fatal to the capture loop; without a working window the
/// operator has no way to drive or stop the program.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to create preview window: {0}")]
    WindowCreation(String),
    #[error("failed to display frame: {0}")]
    ShowFailed(String),
    #[error("preview window closed unexpectedly")]
    Disconnected,
}

/// Commands the capture loops understand.
///
/// Space maps to [`Shutter`] (capture a photo, or toggle recording,
/// depending on the mode) and 'q' maps to [`Quit`]. Every other key is
/// ignored.
///
/// [`Shutter`]: KeyCommand::Shutter
/// [`Quit`]: KeyCommand::Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Capture a photo / toggle recording.
    Shutter,
    /// Leave the capture loop.
    Quit,
}

/// Trait for preview implementations.
pub trait FramePreview {
    /// Displays a frame in the preview.
    fn show(&mut self, frame: &Frame) -> Result<(), PreviewError>;

    /// Waits up to `timeout` for a key press and returns its mapped
    /// command, or `None` if no relevant key arrived in time.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyCommand>, PreviewError>;
}

/// Scripted preview for testing without a window system.
///
/// Yields a queued key script, one entry per poll, and records the sequence
/// number of every frame shown. Once the script is exhausted every poll
/// reports [`KeyCommand::Quit`] so a loop under test always terminates.
#[derive(Debug, Default)]
pub struct ScriptedPreview {
    keys: VecDeque<Option<KeyCommand>>,
    shown: Vec<u64>,
}

impl ScriptedPreview {
    /// Creates a preview that will replay the given key script.
    pub fn with_script(keys: impl IntoIterator<Item = Option<KeyCommand>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Sequence numbers of the frames shown so far, in display order.
    pub fn shown(&self) -> &[u64] {
        &self.shown
    }
}

impl FramePreview for ScriptedPreview {
    fn show(&mut self, frame: &Frame) -> Result<(), PreviewError> {
        self.shown.push(frame.sequence());
        Ok(())
    }

    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<KeyCommand>, PreviewError> {
        Ok(self
            .keys
            .pop_front()
            .unwrap_or(Some(KeyCommand::Quit)))
    }
}
