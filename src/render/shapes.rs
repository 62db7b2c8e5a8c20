use plotters::element::Polygon;
use plotters::style::{Color, RGBColor, ShapeStyle};

const ELLIPSE_SEGMENTS: u32 = 32;

pub(crate) const fn outline(color: RGBColor, stroke_width: u32) -> ShapeStyle {
    let RGBColor(r, g, b) = color;
    ShapeStyle {
        color: plotters::style::RGBAColor(r, g, b, 1.0),
        filled: false,
        stroke_width,
    }
}

pub(crate) fn filled(color: RGBColor) -> ShapeStyle {
    color.filled()
}

/// Filled ellipse inscribed in the box `[left, top] .. [right, bottom]`.
#[expect(
    clippy::float_arithmetic,
    reason = "Ellipse vertices are trigonometric"
)]
pub(crate) fn ellipse(
    (left, top): (i32, i32),
    (right, bottom): (i32, i32),
    color: RGBColor,
) -> Polygon<(i32, i32)> {
    let cx = f64::from(left) + f64::from(right.saturating_sub(left)) / 2.0;
    let cy = f64::from(top) + f64::from(bottom.saturating_sub(top)) / 2.0;
    let rx = f64::from(right.saturating_sub(left)) / 2.0;
    let ry = f64::from(bottom.saturating_sub(top)) / 2.0;
    let points = (0..ELLIPSE_SEGMENTS)
        .map(|step| {
            let angle = std::f64::consts::TAU * f64::from(step) / f64::from(ELLIPSE_SEGMENTS);
            (
                (cx + rx * angle.cos()).round() as i32,
                (cy + ry * angle.sin()).round() as i32,
            )
        })
        .collect::<Vec<_>>();
    Polygon::new(points, filled(color))
}
