//! Capture configuration.
//!
//! Resolution and depth mode are fixed for the lifetime of a session; the
//! configuration is consumed once when the device is opened.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sensor resolutions offered by the stereo camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 672x376.
    Vga,
    /// 1280x720.
    Hd720,
    /// 1920x1080.
    Hd1080,
    /// 2208x1242.
    Hd2k,
}

impl Resolution {
    /// Returns the frame dimensions as (width, height).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Resolution::Vga => (672, 376),
            Resolution::Hd720 => (1280, 720),
            Resolution::Hd1080 => (1920, 1080),
            Resolution::Hd2k => (2208, 1242),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vga" => Ok(Resolution::Vga),
            "hd720" => Ok(Resolution::Hd720),
            "hd1080" => Ok(Resolution::Hd1080),
            "hd2k" => Ok(Resolution::Hd2k),
            other => Err(ConfigError::UnknownResolution(other.to_owned())),
        }
    }
}

/// Depth computation modes of the stereo camera.
///
/// The capture utilities never consume depth data, so only [`Disabled`]
/// passes validation. The remaining variants mirror the device's mode
/// ladder for configuration-file completeness.
///
/// [`Disabled`]: DepthMode::Disabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    /// No depth computation.
    #[default]
    Disabled,
    /// Fastest depth mode.
    Performance,
    /// Balanced depth mode.
    Quality,
    /// Highest-accuracy depth mode.
    Ultra,
}

/// Configuration for a capture session.
///
/// Immutable once passed to [`CameraDevice::open`]; there is no runtime
/// reconfiguration.
///
/// [`CameraDevice::open`]: super::CameraDevice::open
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera device index or identifier.
    pub device_id: u32,
    /// Sensor resolution.
    pub resolution: Resolution,
    /// Depth mode; must be [`DepthMode::Disabled`].
    pub depth_mode: DepthMode,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            resolution: Resolution::Hd720,
            depth_mode: DepthMode::Disabled,
        }
    }
}

impl CaptureConfig {
    /// Creates a configuration with the specified resolution.
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_mode != DepthMode::Disabled {
            return Err(ConfigError::DepthNotSupported(self.depth_mode));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("depth mode {0:?} is not supported by the capture utilities")]
    DepthNotSupported(DepthMode),
    #[error("unknown resolution {0:?} (expected vga, hd720, hd1080 or hd2k)")]
    UnknownResolution(String),
    #[error("output directory must not be empty")]
    EmptyOutputDirectory,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Output locations for saved frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for single photos.
    pub photo_dir: String,
    /// Directory for recorded frame sequences.
    pub video_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            photo_dir: crate::sink::DEFAULT_PHOTO_DIR.to_owned(),
            video_dir: crate::sink::DEFAULT_VIDEO_DIR.to_owned(),
        }
    }
}

impl OutputConfig {
    /// Validates the output locations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photo_dir.is_empty() || self.video_dir.is_empty() {
            return Err(ConfigError::EmptyOutputDirectory);
        }
        Ok(())
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.capture.validate()?;
        config.output.validate()?;
        Ok(config)
    }
}
