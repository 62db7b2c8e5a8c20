use plotters::element::{Circle, PathElement, Rectangle};
use plotters::style::RGBColor;
use rand::Rng;
use rand::seq::SliceRandom;

use super::shapes::{ellipse, filled, outline};
use super::text::{CenteredText, TextFace, paint_centered};
use super::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CONFETTI_COLORS, CONFETTI_COUNT, CUT_LINE_PROGRESS, Canvas,
    FLAME_OUT_PROGRESS, MESSAGE_PROGRESS, RenderSettings,
};

pub(crate) const BACKGROUND: RGBColor = RGBColor(0xad, 0xd8, 0xe6);
const LAYER_COLORS: [RGBColor; 3] = [
    RGBColor(0x8b, 0x45, 0x13),
    RGBColor(0xd2, 0x69, 0x1e),
    RGBColor(0xf4, 0xa4, 0x60),
];
const OUTLINE: RGBColor = RGBColor(0, 0, 0);
pub(crate) const CANDLE: RGBColor = RGBColor(0xff, 0xff, 0x00);
pub(crate) const FLAME: RGBColor = RGBColor(0xff, 0xa5, 0x00);
pub(crate) const KNIFE: RGBColor = RGBColor(0xc0, 0xc0, 0xc0);
pub(crate) const CUT_LINE: RGBColor = RGBColor(0xff, 0xff, 0xff);
const MESSAGE: RGBColor = RGBColor(0xff, 0x00, 0x00);

pub(crate) const CAKE_CENTER_X: i32 = (CANVAS_WIDTH / 2) as i32;
/// Bottom edge of the lowest layer.
pub(crate) const CAKE_BASE_Y: i32 = CANVAS_HEIGHT as i32 - 50;
pub(crate) const CAKE_WIDTH: i32 = 200;
pub(crate) const CAKE_HEIGHT: i32 = 120;
const LAYER_HEIGHT: i32 = CAKE_HEIGHT / LAYER_COLORS.len() as i32;
pub(crate) const CAKE_LEFT: i32 = CAKE_CENTER_X - CAKE_WIDTH / 2;
pub(crate) const CAKE_RIGHT: i32 = CAKE_CENTER_X + CAKE_WIDTH / 2;
pub(crate) const CAKE_TOP: i32 = CAKE_BASE_Y - CAKE_HEIGHT;

pub(crate) const CANDLE_COUNT: i32 = 5;
const CANDLE_SPACING: i32 = CAKE_WIDTH / (CANDLE_COUNT + 1);
const CANDLE_HALF_WIDTH: i32 = 3;
const CANDLE_HEIGHT: i32 = 20;
const FLAME_HALF_WIDTH: i32 = 5;
const FLAME_HEIGHT: i32 = 10;

const KNIFE_CENTER_Y: i32 = CAKE_BASE_Y - CAKE_HEIGHT / 2;
const KNIFE_HALF_LENGTH: i32 = 30;
const KNIFE_WIDTH: u32 = 4;
const CUT_LINE_WIDTH: u32 = 2;
/// The finished cut trails the knife at this fraction of its travel.
const CUT_LINE_LAG: f64 = 0.7;

const CONFETTI_RADIUS: i32 = 3;
const MESSAGE_SIZE: u32 = 24;
const MESSAGE_TOP: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candle {
    pub x: i32,
    pub lit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiDot {
    pub x: i32,
    pub y: i32,
    pub color: (u8, u8, u8),
}

/// What a reveal frame shows, decided before any pixel is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLayout {
    pub progress: f64,
    pub candles: Vec<Candle>,
    /// Moving knife position; absent before the cut starts.
    pub knife_x: Option<i32>,
    /// Finished cut position; present once progress passes the cut threshold.
    pub cut_x: Option<i32>,
    pub confetti: Vec<ConfettiDot>,
    pub show_message: bool,
}

impl RevealLayout {
    pub fn compute<R>(progress: f64, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let lit = progress < FLAME_OUT_PROGRESS;
        let candles = (1..=CANDLE_COUNT)
            .map(|slot| Candle {
                x: CAKE_LEFT.saturating_add(slot.saturating_mul(CANDLE_SPACING)),
                lit,
            })
            .collect();

        let knife_x = (progress > 0.0).then(|| travel(progress));
        let cut_x = (progress > CUT_LINE_PROGRESS).then(|| lagged_travel(progress));

        Self {
            progress,
            candles,
            knife_x,
            cut_x,
            confetti: scatter_confetti(rng),
            show_message: progress > MESSAGE_PROGRESS,
        }
    }
}

/// Knife travels from the right edge of the cake to the left.
#[expect(clippy::float_arithmetic, reason = "Knife position scales with progress")]
fn travel(progress: f64) -> i32 {
    CAKE_RIGHT.saturating_sub((progress * f64::from(CAKE_WIDTH)) as i32)
}

#[expect(clippy::float_arithmetic, reason = "Cut position scales with progress")]
fn lagged_travel(progress: f64) -> i32 {
    CAKE_RIGHT.saturating_sub((progress * f64::from(CAKE_WIDTH) * CUT_LINE_LAG) as i32)
}

fn scatter_confetti<R>(rng: &mut R) -> Vec<ConfettiDot>
where
    R: Rng + ?Sized,
{
    let width = i32::try_from(CANVAS_WIDTH).unwrap_or(i32::MAX);
    let upper_half = i32::try_from(CANVAS_HEIGHT / 2).unwrap_or(i32::MAX);
    (0..CONFETTI_COUNT)
        .map(|_| {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..upper_half);
            let RGBColor(r, g, b) = CONFETTI_COLORS.choose(rng).copied().unwrap_or(MESSAGE);
            ConfettiDot {
                x,
                y,
                color: (r, g, b),
            }
        })
        .collect()
}

pub(super) fn paint(layout: &RevealLayout, settings: &RenderSettings) -> (Canvas, TextFace) {
    let mut canvas = Canvas::filled(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    let shapes = canvas.paint(|area| {
        let mut layer_bottom = CAKE_BASE_Y;
        for color in LAYER_COLORS {
            let layer_top = layer_bottom.saturating_sub(LAYER_HEIGHT);
            let corners = [(CAKE_LEFT, layer_top), (CAKE_RIGHT, layer_bottom)];
            area.draw(&Rectangle::new(corners, filled(color)))?;
            area.draw(&Rectangle::new(corners, outline(OUTLINE, 2)))?;
            layer_bottom = layer_top;
        }

        for candle in &layout.candles {
            let wick_top = CAKE_TOP.saturating_sub(CANDLE_HEIGHT);
            area.draw(&Rectangle::new(
                [
                    (candle.x.saturating_sub(CANDLE_HALF_WIDTH), wick_top),
                    (candle.x.saturating_add(CANDLE_HALF_WIDTH), CAKE_TOP),
                ],
                filled(CANDLE),
            ))?;
            if candle.lit {
                area.draw(&ellipse(
                    (
                        candle.x.saturating_sub(FLAME_HALF_WIDTH),
                        wick_top.saturating_sub(FLAME_HEIGHT),
                    ),
                    (candle.x.saturating_add(FLAME_HALF_WIDTH), wick_top),
                    FLAME,
                ))?;
            }
        }

        if let Some(x) = layout.knife_x {
            area.draw(&PathElement::new(
                vec![
                    (x, KNIFE_CENTER_Y.saturating_sub(KNIFE_HALF_LENGTH)),
                    (x, KNIFE_CENTER_Y.saturating_add(KNIFE_HALF_LENGTH)),
                ],
                outline(KNIFE, KNIFE_WIDTH),
            ))?;
        }
        if let Some(x) = layout.cut_x {
            area.draw(&PathElement::new(
                vec![(x, CAKE_TOP), (x, CAKE_BASE_Y)],
                outline(CUT_LINE, CUT_LINE_WIDTH),
            ))?;
        }

        for dot in &layout.confetti {
            let (r, g, b) = dot.color;
            area.draw(&Circle::new(
                (dot.x, dot.y),
                CONFETTI_RADIUS,
                filled(RGBColor(r, g, b)),
            ))?;
        }
        Ok(())
    });
    if let Err(err) = shapes {
        tracing::warn!(
            "Failed to draw reveal frame at progress {:.2}: {}",
            layout.progress,
            err
        );
    }

    if !layout.show_message {
        return (canvas, TextFace::NoText);
    }
    let face = paint_centered(
        &mut canvas,
        &CenteredText {
            text: &settings.overlay_text,
            center_x: CAKE_CENTER_X,
            top: MESSAGE_TOP,
            size: MESSAGE_SIZE,
            color: MESSAGE,
        },
        &settings.font_family,
    );
    (canvas, face)
}
