//! Video-mode capture loop.

use super::{CaptureReport, KEY_POLL_INTERVAL};
use crate::capture::CameraDevice;
use crate::control::state::RecorderState;
use crate::preview::{FramePreview, KeyCommand, PreviewError};
use crate::session::DeviceSession;
use crate::sink::{sequence_filename, FrameSink};
use tracing::{info, warn};

/// Runs the toggled-recording loop until the operator quits.
///
/// Each iteration grabs a frame and displays it; while recording, the same
/// displayed frame is saved as `{NNNNN}.jpg` before input is polled. The
/// shutter key flips the recording flag, which never resets the frame
/// counter: stopping and restarting continues the numbering.
pub fn run<C, P, S>(
    session: &mut DeviceSession<C>,
    preview: &mut P,
    sink: &S,
) -> Result<CaptureReport, PreviewError>
where
    C: CameraDevice,
    P: FramePreview,
    S: FrameSink,
{
    let mut state = RecorderState::new();
    let mut report = CaptureReport::default();

    loop {
        let frame = match session.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("frame grab failed: {e}");
                report.grab_failures += 1;
                continue;
            }
        };
        report.frames_seen += 1;

        preview.show(&frame)?;

        if let Some(index) = state.pending_save() {
            let name = sequence_filename(index);
            match sink.save(&frame, &name) {
                Ok(path) => {
                    state.confirm_saved();
                    report.frames_saved += 1;
                    info!(path = %path.display(), "frame saved");
                }
                Err(e) => {
                    report.save_failures += 1;
                    warn!("failed to save {name}: {e}");
                }
            }
        }

        match preview.poll_key(KEY_POLL_INTERVAL)? {
            Some(KeyCommand::Shutter) => {
                if state.toggle() {
                    info!("recording started");
                } else {
                    info!(frames = state.frame_count(), "recording stopped");
                }
            }
            Some(KeyCommand::Quit) => {
                info!("exiting");
                break;
            }
            None => {}
        }
    }

    Ok(report)
}
