//! Raster rendering for the placeholder calendar and the reveal animation.
//!
//! Drawing goes through `plotters` on an in-memory RGB buffer. Text prefers a
//! scalable system font and falls back to a built-in bitmap font, so rendering
//! never fails from the caller's point of view.
mod canvas;
mod encode;
mod placeholder;
mod reveal;
mod shapes;
mod text;


pub use canvas::Canvas;
pub use encode::encode_png;
pub use reveal::{Candle, ConfettiDot, RevealLayout};
pub use text::TextFace;

use plotters::style::RGBColor;
use rand::Rng;

use crate::countdown::TargetMoment;

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_OVERLAY_TEXT: &str = "🎂 Happy Birthday! 🎂";

/// Progress at or above which candle flames are blown out.
pub const FLAME_OUT_PROGRESS: f64 = 0.5;
/// Progress above which the finished cut line is visible.
pub const CUT_LINE_PROGRESS: f64 = 0.3;
/// Progress above which the overlay message is shown.
pub const MESSAGE_PROGRESS: f64 = 0.8;
/// Confetti dots scattered on every reveal frame.
pub const CONFETTI_COUNT: usize = 20;

pub(crate) const CONFETTI_COLORS: [RGBColor; 5] = [
    RGBColor(255, 0, 0),
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0),
    RGBColor(255, 255, 0),
    RGBColor(128, 0, 128),
];

/// Inputs for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Reveal stage in `[0, 1]`; ignored by the placeholder.
    pub progress: f64,
    pub reached: bool,
}

impl RenderState {
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            progress: 0.0,
            reached: false,
        }
    }

    /// Reveal state with `progress` clamped into `[0, 1]`; NaN reads as 0.
    #[must_use]
    pub fn reveal(progress: f64) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self {
            progress,
            reached: true,
        }
    }
}

/// Everything the renderer needs besides the per-frame state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub font_family: String,
    pub overlay_text: String,
    pub day_label: String,
    pub month_label: String,
}

impl RenderSettings {
    /// Calendar labels come from the target moment.
    #[must_use]
    pub fn for_target(target: TargetMoment, font_family: &str, overlay_text: &str) -> Self {
        Self {
            font_family: font_family.to_owned(),
            overlay_text: overlay_text.to_owned(),
            day_label: target.day().to_string(),
            month_label: target.month_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameKind {
    Placeholder,
    Reveal(RevealLayout),
}

/// A rendered image plus the structure it was painted from.
#[derive(Debug, Clone)]
pub struct Frame {
    kind: FrameKind,
    face: TextFace,
    canvas: Canvas,
}

impl Frame {
    #[must_use]
    pub const fn kind(&self) -> &FrameKind {
        &self.kind
    }

    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Font that painted this frame's text.
    #[must_use]
    pub const fn text_face(&self) -> TextFace {
        self.face
    }

    #[must_use]
    pub const fn progress(&self) -> Option<f64> {
        match &self.kind {
            FrameKind::Placeholder => None,
            FrameKind::Reveal(layout) => Some(layout.progress),
        }
    }

    #[must_use]
    pub const fn reveal_layout(&self) -> Option<&RevealLayout> {
        match &self.kind {
            FrameKind::Placeholder => None,
            FrameKind::Reveal(layout) => Some(layout),
        }
    }

    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
}

/// Renders one frame. `reached` selects the mode: placeholder calendar before
/// the target, cake reveal after it.
pub fn render_frame<R>(state: RenderState, settings: &RenderSettings, rng: &mut R) -> Frame
where
    R: Rng + ?Sized,
{
    if !state.reached {
        return render_placeholder(settings);
    }
    let layout = RevealLayout::compute(RenderState::reveal(state.progress).progress, rng);
    let (canvas, face) = reveal::paint(&layout, settings);
    Frame {
        kind: FrameKind::Reveal(layout),
        face,
        canvas,
    }
}

/// Renders the calendar placeholder. Deterministic for fixed settings.
#[must_use]
pub fn render_placeholder(settings: &RenderSettings) -> Frame {
    let (canvas, face) = placeholder::paint(settings);
    Frame {
        kind: FrameKind::Placeholder,
        face,
        canvas,
    }
}
