//! Camera abstraction for frame acquisition.
//!
//! This module provides a trait-based abstraction over stereo camera
//! hardware, allowing for both real camera input and mock implementations
//! for testing.

use super::{CaptureConfig, Frame};
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera device not found: {0}")]
    DeviceNotFound(String),
    #[error("failed to open camera: {0}")]
    OpenFailed(String),
    #[error("failed to configure camera: {0}")]
    ConfigFailed(String),
    #[error("failed to grab frame: {0}")]
    GrabFailed(String),
    #[error("view {0:?} not available from this device")]
    ViewUnavailable(View),
    #[error("camera not initialized")]
    NotInitialized,
}

/// Which image of the stereo pair to retrieve.
///
/// Both capture utilities use the left image; the right view exists so a
/// stereo-capable backend can expose it without widening the trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Left sensor of the stereo pair.
    Left,
    /// Right sensor of the stereo pair.
    Right,
}

/// Trait for camera implementations.
///
/// Models the narrow slice of a vendor camera SDK that these utilities
/// consume: open once, grab, retrieve a view, close. The abstraction allows
/// swapping between real camera hardware and mock implementations for
/// testing.
pub trait CameraDevice {
    /// Opens and initializes the camera with the given configuration.
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError>;

    /// Blocks until the device has delivered the next frame.
    ///
    /// A failed grab leaves no frame to retrieve; callers treat it as a
    /// skipped iteration, not a fatal condition.
    fn grab(&mut self) -> Result<(), CameraError>;

    /// Retrieves the requested view of the most recently grabbed frame.
    fn retrieve(&mut self, view: View) -> Result<Frame, CameraError>;

    /// Checks if the camera is currently open.
    fn is_open(&self) -> bool;

    /// Closes the camera and releases resources.
    fn close(&mut self);
}
