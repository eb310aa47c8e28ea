//! Preview window backed by `show-image`.

use super::{FramePreview, KeyCommand, PreviewError};
use crate::capture::Frame;
use show_image::event::{VirtualKeyCode, WindowEvent};
use show_image::{create_window, ImageInfo, ImageView, WindowOptions, WindowProxy};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// A live preview window with keyboard input.
///
/// Binaries using this type must run inside the `show-image` context
/// (`#[show_image::main]`), which owns the platform event loop.
pub struct PreviewWindow {
    window: WindowProxy,
    events: Receiver<WindowEvent>,
}

impl PreviewWindow {
    /// Creates a visible window with the given title.
    pub fn new(title: &str) -> Result<Self, PreviewError> {
        let window = create_window(title, WindowOptions::default())
            .map_err(|e| PreviewError::WindowCreation(e.to_string()))?;
        let events = window
            .event_channel()
            .map_err(|e| PreviewError::WindowCreation(e.to_string()))?;
        Ok(Self { window, events })
    }

    fn map_event(event: &WindowEvent) -> Option<KeyCommand> {
        match event {
            WindowEvent::KeyboardInput(input) if input.input.state.is_pressed() => {
                match input.input.key_code {
                    Some(VirtualKeyCode::Space) => Some(KeyCommand::Shutter),
                    Some(VirtualKeyCode::Q) => Some(KeyCommand::Quit),
                    _ => None,
                }
            }
            // Closing the window is equivalent to quitting.
            WindowEvent::CloseRequested(_) | WindowEvent::Destroyed(_) => Some(KeyCommand::Quit),
            _ => None,
        }
    }
}

impl FramePreview for PreviewWindow {
    fn show(&mut self, frame: &Frame) -> Result<(), PreviewError> {
        let info = ImageInfo::rgb8(frame.width(), frame.height());
        let image = ImageView::new(info, frame.pixels());
        self.window
            .set_image("live", image)
            .map_err(|e| PreviewError::ShowFailed(e.to_string()))
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyCommand>, PreviewError> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(event) => {
                    if let Some(command) = Self::map_event(&event) {
                        return Ok(Some(command));
                    }
                    // Unmapped event; keep draining until the deadline.
                }
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Err(PreviewError::Disconnected),
            }
        }
    }
}
