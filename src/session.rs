//! Device session lifecycle.
//!
//! A session owns the camera for the lifetime of the program: opened once at
//! startup, frames pulled on demand, closed exactly once on exit. An open
//! failure constructs no session, so the failed path releases nothing.

use crate::capture::{CameraDevice, CameraError, CaptureConfig, Frame, View};

/// An open camera session.
///
/// Wraps a [`CameraDevice`] that was successfully opened. The device is
/// closed when the session is dropped, which covers the single
/// normal-termination path of the capture loops.
pub struct DeviceSession<C: CameraDevice> {
    camera: C,
}

impl<C: CameraDevice> DeviceSession<C> {
    /// Opens the camera and wraps it in a session.
    ///
    /// On failure the camera is returned unopened inside the error path;
    /// no cleanup is required because no handle was acquired.
    pub fn open(mut camera: C, config: &CaptureConfig) -> Result<Self, CameraError> {
        camera.open(config)?;
        Ok(Self { camera })
    }

    /// Blocks until the device delivers the next frame and returns its
    /// left view.
    ///
    /// Errors are transient: the caller skips the iteration and polls again.
    pub fn next_frame(&mut self) -> Result<Frame, CameraError> {
        self.camera.grab()?;
        self.camera.retrieve(View::Left)
    }

    /// Retrieves an arbitrary view of the most recently grabbed frame.
    pub fn retrieve(&mut self, view: View) -> Result<Frame, CameraError> {
        self.camera.retrieve(view)
    }

    /// Returns a reference to the underlying camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }
}

impl<C: CameraDevice> Drop for DeviceSession<C> {
    fn drop(&mut self) {
        if self.camera.is_open() {
            self.camera.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{MockCamera, Resolution};

    #[test]
    fn test_session_yields_frames() {
        let config = CaptureConfig::with_resolution(Resolution::Vga);
        let mut session = DeviceSession::open(MockCamera::new(), &config).unwrap();

        let frame = session.next_frame().unwrap();
        assert_eq!(frame.sequence(), 1);
        let frame = session.next_frame().unwrap();
        assert_eq!(frame.sequence(), 2);
    }

    #[test]
    fn test_retrieve_other_view() {
        let config = CaptureConfig::with_resolution(Resolution::Vga);
        let mut session = DeviceSession::open(MockCamera::new(), &config).unwrap();

        let left = session.next_frame().unwrap();
        let right = session.retrieve(View::Right).unwrap();
        assert_eq!(left.sequence(), right.sequence());
        assert_ne!(left.pixels()[0], right.pixels()[0]);
    }

    #[test]
    fn test_open_failure_builds_no_session() {
        let config = CaptureConfig::default();
        let result = DeviceSession::open(MockCamera::new().with_failing_open(), &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_drop_closes_camera() {
        let config = CaptureConfig::with_resolution(Resolution::Vga);
        let session = DeviceSession::open(MockCamera::new(), &config).unwrap();
        assert!(session.camera().is_open());
        drop(session);
        // Dropping must not panic; close side effects are covered by the
        // MockCamera lifecycle test.
    }
}
