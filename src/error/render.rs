use plotters::prelude::{BitMapBackend, DrawingAreaErrorKind, DrawingBackend};
use thiserror::Error;

pub type PlottersError =
    DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing failed: {source}")]
    Draw {
        #[from]
        source: PlottersError,
    },
    #[error("Frame buffer of {len} bytes does not match a {width}x{height} RGB canvas.")]
    BufferSize { width: u32, height: u32, len: usize },
    #[error("PNG encoding failed: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },
}
