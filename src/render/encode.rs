use std::io::Cursor;

use image::{ImageOutputFormat, RgbImage};

use super::Canvas;
use crate::error::RenderError;

/// Encodes a canvas as PNG bytes.
///
/// # Errors
///
/// Returns an error when the pixel buffer does not match the canvas size or
/// the encoder fails.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
    let image = RgbImage::from_raw(canvas.width(), canvas.height(), canvas.pixels().to_vec())
        .ok_or(RenderError::BufferSize {
            width: canvas.width(),
            height: canvas.height(),
            len: canvas.pixels().len(),
        })?;
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .map_err(|source| RenderError::Encode { source })?;
    Ok(bytes.into_inner())
}
