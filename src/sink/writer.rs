//! Directory-backed frame writer.

use super::{FrameSink, SinkError};
use crate::capture::Frame;
use std::path::{Path, PathBuf};

/// Creates `path` and any missing parents; succeeds if it already exists.
pub fn ensure_directory(path: impl AsRef<Path>) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Writes frames into a fixed output directory.
///
/// The codec is selected from the file name's extension, so the same writer
/// serves both the PNG photo policy and the JPEG sequence policy.
pub struct FrameWriter {
    directory: PathBuf,
}

impl FrameWriter {
    /// Creates a writer rooted at `directory`, creating it if needed.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let directory = directory.into();
        ensure_directory(&directory)?;
        Ok(Self { directory })
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FrameSink for FrameWriter {
    fn save(&self, frame: &Frame, name: &str) -> Result<PathBuf, SinkError> {
        let image: image::RgbImage = image::ImageBuffer::from_raw(
            frame.width(),
            frame.height(),
            frame.pixels().to_vec(),
        )
        .ok_or(SinkError::MalformedFrame)?;

        let path = self.directory.join(name);
        image.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Frame;
    use std::sync::atomic::{AtomicU64, Ordering};

    static DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "zed-capture-{tag}-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ))
    }

    fn test_frame() -> Frame {
        Frame::new(vec![127u8; 8 * 4 * 3], 8, 4, 1)
    }

    #[test]
    fn test_ensure_directory_idempotent() {
        let dir = scratch_dir("dir");
        ensure_directory(&dir).unwrap();
        ensure_directory(&dir).unwrap();
        assert!(dir.is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_png_roundtrip() {
        let dir = scratch_dir("png");
        let writer = FrameWriter::new(&dir).unwrap();

        let path = writer.save(&test_frame(), "captured_image_1.png").unwrap();
        assert!(path.is_file());

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (8, 4));
        assert_eq!(decoded.get_pixel(0, 0).0, [127, 127, 127]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_jpeg_by_extension() {
        let dir = scratch_dir("jpg");
        let writer = FrameWriter::new(&dir).unwrap();

        let path = writer.save(&test_frame(), "00000.jpg").unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 8);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_rejects_malformed_frame() {
        let dir = scratch_dir("bad");
        let writer = FrameWriter::new(&dir).unwrap();

        let frame = Frame::new(vec![0u8; 5], 8, 4, 1);
        assert!(matches!(
            writer.save(&frame, "bad.png"),
            Err(SinkError::MalformedFrame)
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
