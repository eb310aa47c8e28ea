//! Photo-mode capture loop.

use super::{CaptureReport, KEY_POLL_INTERVAL};
use crate::capture::CameraDevice;
use crate::control::state::ShutterCounter;
use crate::preview::{FramePreview, KeyCommand, PreviewError};
use crate::session::DeviceSession;
use crate::sink::{photo_filename, FrameSink};
use tracing::{info, warn};

/// Runs the still-photo loop until the operator quits.
///
/// Each iteration grabs a frame, displays it and polls for input. The
/// shutter key saves the frame currently on screen as
/// `captured_image_{N}.png`. Grab and save failures are logged and the loop
/// continues; preview failures end the loop since the operator has lost
/// control of the program.
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
    let mut counter = ShutterCounter::new();
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

        match preview.poll_key(KEY_POLL_INTERVAL)? {
            Some(KeyCommand::Shutter) => {
                let name = photo_filename(counter.next_index());
                match sink.save(&frame, &name) {
                    Ok(path) => {
                        counter.confirm_saved();
                        report.frames_saved += 1;
                        info!(path = %path.display(), "image saved");
                    }
                    Err(e) => {
                        report.save_failures += 1;
                        warn!("failed to save {name}: {e}");
                    }
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
