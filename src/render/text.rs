use embedded_graphics::Drawable;
use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor};

use super::Canvas;

/// Point size at and above which the large built-in font is used.
const LARGE_BUILTIN_THRESHOLD: u32 = 20;

/// Which font actually painted a frame's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFace {
    /// The frame carries no text.
    NoText,
    /// The preferred scalable font rendered the text.
    Scalable,
    /// The scalable font was unavailable; the bitmap font was used.
    Builtin,
}

/// Text horizontally centred on `center_x` with its top edge at `top`.
pub(crate) struct CenteredText<'text> {
    pub(crate) text: &'text str,
    pub(crate) center_x: i32,
    pub(crate) top: i32,
    pub(crate) size: u32,
    pub(crate) color: RGBColor,
}

/// Paints `spec`, measuring it first so it can be centred.
pub(crate) fn paint_centered(canvas: &mut Canvas, spec: &CenteredText<'_>, family: &str) -> TextFace {
    let scalable = canvas.paint(|area| {
        let style = FontDesc::new(FontFamily::from(family), f64::from(spec.size), FontStyle::Normal)
            .color(&spec.color);
        let (width, _) = area.estimate_text_size(spec.text, &style)?;
        let left = spec.center_x.saturating_sub(half(width));
        area.draw_text(spec.text, &style, (left, spec.top))
    });

    match scalable {
        Ok(()) => TextFace::Scalable,
        Err(err) => {
            tracing::debug!("Font '{}' unavailable, using built-in font: {}", family, err);
            paint_builtin(canvas, spec);
            TextFace::Builtin
        }
    }
}

fn paint_builtin(canvas: &mut Canvas, spec: &CenteredText<'_>) {
    let font: &MonoFont<'static> = if spec.size >= LARGE_BUILTIN_THRESHOLD {
        &FONT_10X20
    } else {
        &FONT_6X10
    };
    let text = builtin_text(spec.text);
    let RGBColor(r, g, b) = spec.color;
    let style = MonoTextStyle::new(font, Rgb888::new(r, g, b));
    let width = style
        .measure_string(&text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width;
    let left = spec.center_x.saturating_sub(half(width));
    let drawn = Text::with_baseline(&text, Point::new(left, spec.top), style, Baseline::Top)
        .draw(canvas);
    if let Err(never) = drawn {
        match never {}
    }
}

/// The ASCII bitmap fonts have no emoji; drop anything they cannot draw.
pub(crate) fn builtin_text(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|ch| ch.is_ascii() && !ch.is_ascii_control())
        .collect();
    printable.trim().to_owned()
}

fn half(width: u32) -> i32 {
    i32::try_from(width / 2).unwrap_or(i32::MAX)
}
