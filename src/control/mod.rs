//! Capture loops.
//!
//! The two loop drivers share one shape: grab a frame, display it, decide
//! whether to persist it, poll for input. They differ only in what the
//! shutter key means — save once (photo) or toggle a recording flag
//! (video). Both are generic over the camera, preview and sink seams so the
//! full loop runs in tests against mock backends.

pub mod photo;
mod state;
pub mod video;

pub use state::{RecorderState, ShutterCounter};

use std::time::Duration;

/// How long each iteration waits for a key press. Kept near-nonblocking so
/// the preview stays live at the camera's frame rate.
pub(crate) const KEY_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Summary of a finished capture loop, logged by the binaries at exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// Frames successfully grabbed and displayed.
    pub frames_seen: u64,
    /// Frames persisted to disk.
    pub frames_saved: u64,
    /// Grabs that failed and were skipped.
    pub grab_failures: u64,
    /// Saves that failed and were skipped.
    pub save_failures: u64,
}
