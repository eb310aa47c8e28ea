//! Mock camera producing deterministic synthetic frames.
//!
//! Used by the unit and integration tests, and usable as a stand-in frame
//! source on machines without a camera.

use super::{CameraDevice, CameraError, CaptureConfig, Frame, View};
use std::collections::VecDeque;

/// Mock camera for testing that generates synthetic frames.
///
/// Grab outcomes can be scripted ahead of time so tests can interleave
/// failures with successful frames; an unscripted grab always succeeds.
#[derive(Debug, Default)]
pub struct MockCamera {
    config: Option<CaptureConfig>,
    sequence: u64,
    grabbed: bool,
    fail_open: bool,
    grab_script: VecDeque<bool>,
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `open` call fail, for exercising the fatal startup path.
    pub fn with_failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Queues per-grab outcomes; `true` means the grab succeeds.
    ///
    /// Outcomes are consumed in order; once the script is exhausted every
    /// grab succeeds again.
    pub fn script_grabs(&mut self, outcomes: impl IntoIterator<Item = bool>) {
        self.grab_script.extend(outcomes);
    }

    /// Number of grabs that returned a frame so far.
    pub fn frames_delivered(&self) -> u64 {
        self.sequence
    }
}

impl CameraDevice for MockCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        if self.fail_open {
            return Err(CameraError::OpenFailed("mock open failure".to_owned()));
        }
        config
            .validate()
            .map_err(|e| CameraError::ConfigFailed(e.to_string()))?;
        self.config = Some(config.clone());
        self.sequence = 0;
        self.grabbed = false;
        tracing::info!("MockCamera opened with config: {:?}", config);
        Ok(())
    }

    fn grab(&mut self) -> Result<(), CameraError> {
        if self.config.is_none() {
            return Err(CameraError::NotInitialized);
        }
        if let Some(false) = self.grab_script.pop_front() {
            self.grabbed = false;
            return Err(CameraError::GrabFailed("scripted grab failure".to_owned()));
        }
        self.sequence += 1;
        self.grabbed = true;
        Ok(())
    }

    fn retrieve(&mut self, view: View) -> Result<Frame, CameraError> {
        let config = self.config.as_ref().ok_or(CameraError::NotInitialized)?;
        if !self.grabbed {
            return Err(CameraError::GrabFailed("no frame grabbed".to_owned()));
        }

        let (width, height) = config.resolution.dimensions();
        // Horizontal gradient, offset per view so left and right differ.
        let view_offset: u64 = match view {
            View::Left => 0,
            View::Right => 64,
        };
        let mut row = Vec::with_capacity((width * 3) as usize);
        for x in 0..width {
            let luma = ((u64::from(x) * 255 / u64::from(width) + self.sequence + view_offset)
                % 256) as u8;
            row.extend_from_slice(&[luma, luma, luma]);
        }
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..height {
            pixels.extend_from_slice(&row);
        }

        Ok(Frame::new(pixels, width, height, self.sequence))
    }

    fn is_open(&self) -> bool {
        self.config.is_some()
    }

    fn close(&mut self) {
        self.config = None;
        self.grabbed = false;
        tracing::info!("MockCamera closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Resolution;

    fn small_config() -> CaptureConfig {
        CaptureConfig::with_resolution(Resolution::Vga)
    }

    #[test]
    fn test_mock_camera_lifecycle() {
        let mut camera = MockCamera::new();

        assert!(!camera.is_open());

        camera.open(&small_config()).unwrap();
        assert!(camera.is_open());

        camera.grab().unwrap();
        let frame = camera.retrieve(View::Left).unwrap();
        assert!(frame.is_valid());
        assert_eq!(frame.sequence(), 1);

        camera.grab().unwrap();
        let frame2 = camera.retrieve(View::Left).unwrap();
        assert_eq!(frame2.sequence(), 2);

        camera.close();
        assert!(!camera.is_open());
    }

    #[test]
    fn test_grab_without_open() {
        let mut camera = MockCamera::new();
        assert!(matches!(camera.grab(), Err(CameraError::NotInitialized)));
    }

    #[test]
    fn test_retrieve_without_grab() {
        let mut camera = MockCamera::new();
        camera.open(&small_config()).unwrap();
        assert!(camera.retrieve(View::Left).is_err());
    }

    #[test]
    fn test_scripted_grab_failures() {
        let mut camera = MockCamera::new();
        camera.open(&small_config()).unwrap();
        camera.script_grabs([true, false, true]);

        assert!(camera.grab().is_ok());
        assert!(matches!(camera.grab(), Err(CameraError::GrabFailed(_))));
        assert!(camera.grab().is_ok());
        // Script exhausted: back to unconditional success.
        assert!(camera.grab().is_ok());
        assert_eq!(camera.frames_delivered(), 3);
    }

    #[test]
    fn test_failing_open() {
        let mut camera = MockCamera::new().with_failing_open();
        assert!(matches!(
            camera.open(&small_config()),
            Err(CameraError::OpenFailed(_))
        ));
        assert!(!camera.is_open());
    }

    #[test]
    fn test_views_differ() {
        let mut camera = MockCamera::new();
        camera.open(&small_config()).unwrap();
        camera.grab().unwrap();
        let left = camera.retrieve(View::Left).unwrap();
        let right = camera.retrieve(View::Right).unwrap();
        assert_ne!(left.pixels()[0], right.pixels()[0]);
    }
}
