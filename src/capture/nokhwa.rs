//! Real camera backend built on `nokhwa`.
//!
//! `nokhwa` abstracts over the platform capture APIs, which exposes the
//! camera as a single RGB stream. This backend therefore serves the left
//! view of the stereo pair; requesting the right view is reported as
//! unavailable.

use super::{CameraDevice, CameraError, CaptureConfig, Frame, View};
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType},
};

/// Camera backend streaming frames through `nokhwa`.
#[derive(Default)]
pub struct NokhwaCamera {
    inner: Option<nokhwa::Camera>,
    pending: Option<Frame>,
    sequence: u64,
}

impl NokhwaCamera {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CameraDevice for NokhwaCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        config
            .validate()
            .map_err(|e| CameraError::ConfigFailed(e.to_string()))?;

        let (width, height) = config.resolution.dimensions();
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                nokhwa::utils::Resolution::new(width, height),
                FrameFormat::MJPEG,
                30,
            ),
        ));

        let mut camera = nokhwa::Camera::new(CameraIndex::Index(config.device_id), requested)
            .map_err(|e| CameraError::DeviceNotFound(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| CameraError::OpenFailed(e.to_string()))?;

        tracing::info!(
            device = config.device_id,
            format = ?camera.camera_format(),
            "camera stream opened"
        );

        self.inner = Some(camera);
        self.pending = None;
        self.sequence = 0;
        Ok(())
    }

    fn grab(&mut self) -> Result<(), CameraError> {
        let camera = self.inner.as_mut().ok_or(CameraError::NotInitialized)?;

        let buffer = camera
            .frame()
            .map_err(|e| CameraError::GrabFailed(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::GrabFailed(e.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        self.sequence += 1;
        self.pending = Some(Frame::new(decoded.into_raw(), width, height, self.sequence));
        Ok(())
    }

    fn retrieve(&mut self, view: View) -> Result<Frame, CameraError> {
        if self.inner.is_none() {
            return Err(CameraError::NotInitialized);
        }
        if view != View::Left {
            return Err(CameraError::ViewUnavailable(view));
        }
        self.pending
            .clone()
            .ok_or_else(|| CameraError::GrabFailed("no frame grabbed".to_owned()))
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn close(&mut self) {
        if let Some(mut camera) = self.inner.take() {
            if let Err(e) = camera.stop_stream() {
                tracing::warn!("failed to stop camera stream: {e}");
            }
        }
        self.pending = None;
        tracing::info!("camera closed");
    }
}
