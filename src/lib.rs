//! ZED Capture Library
//!
//! Interactive capture utilities for a stereo depth camera: single-shot
//! photos on a keypress, and toggled recording of numbered frame sequences.
//!
//! # Architecture
//!
//! The system follows an explicit control flow:
//!
//! ```text
//! session (camera lifecycle) → control (capture loop) → sink (persistence)
//!                                   ↓
//!                          preview (display + keys)
//! ```
//!
//! # Design Principles
//!
//! - **Narrow seams**: the camera, the preview window and the persistence
//!   sink are traits, so the full capture loop runs in tests against
//!   deterministic mock backends
//! - **Pure state**: the recording toggle and the frame counters are plain
//!   structs whose transitions perform no I/O
//! - **Counters only advance**: an index is consumed only when its save
//!   succeeded, keeping the persisted numbering gap-free
//! - **Transient failures stay local**: a failed grab or save is logged and
//!   the loop continues; only startup failures end the program
//!
//! # Example
//!
//! ```no_run
//! use zed_capture::{
//!     capture::{CaptureConfig, MockCamera, Resolution},
//!     control,
//!     preview::{KeyCommand, ScriptedPreview},
//!     session::DeviceSession,
//!     sink::FrameWriter,
//! };
//!
//! let config = CaptureConfig::with_resolution(Resolution::Hd720);
//! let mut session = DeviceSession::open(MockCamera::new(), &config).unwrap();
//!
//! // Record two frames, then quit.
//! let mut preview = ScriptedPreview::with_script([
//!     Some(KeyCommand::Shutter),
//!     None,
//!     Some(KeyCommand::Shutter),
//!     Some(KeyCommand::Quit),
//! ]);
//! let sink = FrameWriter::new("custom_video_frames").unwrap();
//!
//! let report = control::video::run(&mut session, &mut preview, &sink).unwrap();
//! assert_eq!(report.frames_saved, 2);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod capture;
pub mod control;
pub mod preview;
pub mod session;
pub mod sink;

// Re-export commonly used types at crate root
pub use capture::{
    CameraDevice, CameraError, CaptureConfig, DepthMode, FileConfig, Frame, MockCamera,
    OutputConfig, Resolution, View,
};
pub use control::{CaptureReport, RecorderState, ShutterCounter};
pub use preview::{FramePreview, KeyCommand, PreviewError, ScriptedPreview};
pub use session::DeviceSession;
pub use sink::{FrameSink, FrameWriter, SinkError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
