// SPDX-License-Identifier: MPL-2.0
//! A captured snapshot and its export to disk.

use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Default file name offered by the save dialog.
pub const SNAPSHOT_FILE_NAME: &str = "snapshot.png";

/// A still frame captured from the preview.
///
/// The pixel data is exactly what the user saw: if the preview was mirrored
/// at capture time, the mirror has already been applied.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl Snapshot {
    /// Creates an Iced image handle for displaying this snapshot.
    pub fn to_handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(self.width, self.height, self.rgba.as_ref().clone())
    }

    /// Writes the snapshot to `path` as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let buffer: image_rs::RgbaImage =
            image_rs::ImageBuffer::from_raw(self.width, self.height, self.rgba.as_ref().clone())
                .ok_or_else(|| {
                    Error::Io("snapshot pixel data does not match its dimensions".to_string())
                })?;
        buffer
            .save_with_format(path, image_rs::ImageFormat::Png)
            .map_err(|e| Error::Io(e.to_string()))?;
        Ok(())
    }
}

/// Mirrors RGBA pixel data left-to-right.
///
/// Used to bake the preview mirror into a capture, and to mirror live frames
/// for display. Operates on raw rows so no intermediate image is allocated.
pub fn flip_rgba_horizontal(rgba: &[u8], width: u32, height: u32) -> Vec<u8> {
    let row_len = width as usize * 4;
    let mut flipped = Vec::with_capacity(rgba.len());
    for row in rgba.chunks_exact(row_len).take(height as usize) {
        for pixel in row.chunks_exact(4).rev() {
            flipped.extend_from_slice(pixel);
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone_row() -> Vec<u8> {
        // 2x1: black pixel then white pixel.
        vec![0, 0, 0, 255, 255, 255, 255, 255]
    }

    #[test]
    fn flip_horizontal_mirrors_pixels_left_to_right() {
        let flipped = flip_rgba_horizontal(&two_tone_row(), 2, 1);
        assert_eq!(flipped, vec![255, 255, 255, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn flip_horizontal_twice_is_identity() {
        let original = two_tone_row();
        let once = flip_rgba_horizontal(&original, 2, 1);
        let twice = flip_rgba_horizontal(&once, 2, 1);
        assert_eq!(twice, original);
    }

    #[test]
    fn flip_horizontal_keeps_rows_independent() {
        // 2x2 with distinct corner pixels.
        let rgba = vec![
            1, 0, 0, 255, 2, 0, 0, 255, // row 0
            3, 0, 0, 255, 4, 0, 0, 255, // row 1
        ];
        let flipped = flip_rgba_horizontal(&rgba, 2, 2);
        assert_eq!(flipped[0], 2);
        assert_eq!(flipped[4], 1);
        assert_eq!(flipped[8], 4);
        assert_eq!(flipped[12], 3);
    }

    #[test]
    fn save_png_writes_decodable_file() {
        let snapshot = Snapshot {
            rgba: Arc::new(vec![255; 4 * 3 * 4]),
            width: 4,
            height: 3,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);

        snapshot.save_png(&path).expect("save should succeed");

        let reloaded = image_rs::open(&path).expect("written PNG should decode");
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 3);
    }

    #[test]
    fn save_png_rejects_mismatched_dimensions() {
        let snapshot = Snapshot {
            rgba: Arc::new(vec![0; 8]),
            width: 100,
            height: 100,
        };
        let dir = tempfile::tempdir().unwrap();
        let result = snapshot.save_png(&dir.path().join("bad.png"));
        assert!(result.is_err());
    }
}
