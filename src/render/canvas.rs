use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::draw_target::DrawTarget;
use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, DrawingArea, IntoDrawingArea};
use plotters::style::RGBColor;

use crate::error::{PlottersError, RenderError};

const BYTES_PER_PIXEL: usize = 3;

/// Fixed-size RGB8 pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    #[must_use]
    pub fn filled(width: u32, height: u32, background: RGBColor) -> Self {
        let count = (width as usize).saturating_mul(height as usize);
        let RGBColor(r, g, b) = background;
        let mut pixels = Vec::with_capacity(count.saturating_mul(BYTES_PER_PIXEL));
        for _ in 0..count {
            pixels.extend_from_slice(&[r, g, b]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let offset = self.offset(x, y)?;
        let end = offset.checked_add(BYTES_PER_PIXEL)?;
        match self.pixels.get(offset..end)? {
            [r, g, b] => Some([*r, *g, *b]),
            _ => None,
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(BYTES_PER_PIXEL)
    }

    fn put_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let Some(end) = offset.checked_add(BYTES_PER_PIXEL) else {
            return;
        };
        if let Some(slot) = self.pixels.get_mut(offset..end) {
            slot.copy_from_slice(&rgb);
        }
    }

    /// Runs `draw` against a `plotters` drawing area backed by this buffer.
    pub(crate) fn paint<F>(&mut self, draw: F) -> Result<(), RenderError>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), PlottersError>,
    {
        let expected = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(BYTES_PER_PIXEL);
        if self.pixels.len() != expected {
            return Err(RenderError::BufferSize {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        let size = (self.width, self.height);
        let area = BitMapBackend::with_buffer(&mut self.pixels, size).into_drawing_area();
        draw(&area)?;
        area.present()?;
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put_pixel(point.x, point.y, [color.r(), color.g(), color.b()]);
        }
        Ok(())
    }
}
