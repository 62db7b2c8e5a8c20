use plotters::element::Rectangle;
use plotters::style::RGBColor;

use super::shapes::{ellipse, filled, outline};
use super::text::{CenteredText, TextFace, paint_centered};
use super::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas, RenderSettings};

pub(crate) const BACKGROUND: RGBColor = RGBColor(0xf0, 0xf8, 0xff);
pub(crate) const CARD_FILL: RGBColor = RGBColor(0xff, 0xff, 0xff);
pub(crate) const INK: RGBColor = RGBColor(0x33, 0x33, 0x33);
pub(crate) const HEADER_FILL: RGBColor = RGBColor(0xff, 0x6b, 0x6b);
const MONTH_INK: RGBColor = RGBColor(0x66, 0x66, 0x66);

pub(crate) const CARD_WIDTH: i32 = 150;
pub(crate) const CARD_HEIGHT: i32 = 120;
pub(crate) const HEADER_HEIGHT: i32 = 20;
pub(crate) const CENTER_X: i32 = (CANVAS_WIDTH / 2) as i32;
pub(crate) const CENTER_Y: i32 = (CANVAS_HEIGHT / 2) as i32;
pub(crate) const CARD_LEFT: i32 = CENTER_X - CARD_WIDTH / 2;
pub(crate) const CARD_RIGHT: i32 = CENTER_X + CARD_WIDTH / 2;
pub(crate) const CARD_TOP: i32 = CENTER_Y - CARD_HEIGHT / 2;
pub(crate) const CARD_BOTTOM: i32 = CENTER_Y + CARD_HEIGHT / 2;
pub(crate) const RING_OFFSETS: [i32; 3] = [-30, 0, 30];
const RING_HALF_WIDTH: i32 = 5;
const RING_HALF_HEIGHT: i32 = 10;

const DAY_SIZE: u32 = 36;
const DAY_TOP: i32 = CENTER_Y - 10;
const MONTH_SIZE: u32 = 16;
const MONTH_TOP: i32 = CENTER_Y + 25;

pub(super) fn paint(settings: &RenderSettings) -> (Canvas, TextFace) {
    let mut canvas = Canvas::filled(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    let shapes = canvas.paint(|area| {
        area.draw(&Rectangle::new(
            [(CARD_LEFT, CARD_TOP), (CARD_RIGHT, CARD_BOTTOM)],
            filled(CARD_FILL),
        ))?;
        area.draw(&Rectangle::new(
            [(CARD_LEFT, CARD_TOP), (CARD_RIGHT, CARD_BOTTOM)],
            outline(INK, 3),
        ))?;
        let header = [
            (CARD_LEFT, CARD_TOP),
            (CARD_RIGHT, CARD_TOP.saturating_add(HEADER_HEIGHT)),
        ];
        area.draw(&Rectangle::new(header, filled(HEADER_FILL)))?;
        area.draw(&Rectangle::new(header, outline(INK, 2)))?;
        for offset in RING_OFFSETS {
            let x = CENTER_X.saturating_add(offset);
            area.draw(&ellipse(
                (
                    x.saturating_sub(RING_HALF_WIDTH),
                    CARD_TOP.saturating_sub(RING_HALF_HEIGHT),
                ),
                (
                    x.saturating_add(RING_HALF_WIDTH),
                    CARD_TOP.saturating_add(RING_HALF_HEIGHT),
                ),
                INK,
            ))?;
        }
        Ok(())
    });
    if let Err(err) = shapes {
        tracing::warn!("Failed to draw calendar placeholder: {}", err);
    }

    let day = paint_centered(
        &mut canvas,
        &CenteredText {
            text: &settings.day_label,
            center_x: CENTER_X,
            top: DAY_TOP,
            size: DAY_SIZE,
            color: INK,
        },
        &settings.font_family,
    );
    let month = paint_centered(
        &mut canvas,
        &CenteredText {
            text: &settings.month_label,
            center_x: CENTER_X,
            top: MONTH_TOP,
            size: MONTH_SIZE,
            color: MONTH_INK,
        },
        &settings.font_family,
    );

    let face = if day == TextFace::Builtin || month == TextFace::Builtin {
        TextFace::Builtin
    } else {
        TextFace::Scalable
    };
    (canvas, face)
}
