//! Camera input and frame handling.
//!
//! This module provides abstractions for acquiring frames from a stereo
//! camera and managing camera configuration. The camera is treated as an
//! external device behind a narrow capability interface.

mod camera;
mod config;
mod frame;
mod mock;

#[cfg(feature = "camera")]
mod nokhwa;

pub use camera::{CameraDevice, CameraError, View};
pub use config::{
    CaptureConfig, ConfigError, DepthMode, FileConfig, OutputConfig, Resolution,
};
pub use frame::Frame;
pub use mock::MockCamera;

#[cfg(feature = "camera")]
pub use self::nokhwa::NokhwaCamera;
