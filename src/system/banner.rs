use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::countdown::TargetMoment;

const TITLE: &str = "⏰ Starting Countdown App...";

const COLOR_START: (u8, u8, u8) = (0x66, 0x7e, 0xea);
const COLOR_END: (u8, u8, u8) = (0x76, 0x4b, 0xa2);

/// Platform variable whose presence marks a hosted deployment.
pub(crate) const HOSTED_ENV_VAR: &str = "SPACE_ID";

pub(crate) struct BannerInfo<'info> {
    pub(crate) requested_port: u16,
    pub(crate) port: u16,
    pub(crate) target: TargetMoment,
    pub(crate) url: &'info str,
    pub(crate) hosted: bool,
}

pub(crate) fn startup_lines(info: &BannerInfo<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    if info.port != info.requested_port {
        lines.push(format!(
            "⚠️  Port {} is busy, using port {} instead",
            info.requested_port, info.port
        ));
    }
    lines.push(TITLE.to_owned());
    lines.push(format!("📅 Target date: {}", info.target));
    if info.hosted {
        lines.push(format!("🌟 Hosted environment detected, serving on port {}", info.port));
    } else {
        lines.push(format!("🌟 Access the app at: {}", info.url));
    }
    lines
}

pub(crate) fn print_startup_banner(info: &BannerInfo<'_>, no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    let lines = startup_lines(info);
    let denom = lines.len().saturating_sub(1);
    for (idx, line) in lines.iter().enumerate() {
        if use_color {
            let (r, g, b) = gradient_rgb(COLOR_START, COLOR_END, idx, denom);
            println!("{}", line.as_str().with(Color::Rgb { r, g, b }));
        } else {
            println!("{line}");
        }
    }
}

fn gradient_rgb(start: (u8, u8, u8), end: (u8, u8, u8), idx: usize, denom: usize) -> (u8, u8, u8) {
    if denom == 0 {
        return start;
    }
    let step = idx.min(denom);
    (
        lerp_channel(start.0, end.0, step, denom),
        lerp_channel(start.1, end.1, step, denom),
        lerp_channel(start.2, end.2, step, denom),
    )
}

fn lerp_channel(from: u8, to: u8, step: usize, denom: usize) -> u8 {
    let from = i64::from(from);
    let to = i64::from(to);
    let step = i64::try_from(step).unwrap_or(0);
    let denom = i64::try_from(denom).unwrap_or(1).max(1);
    let value = from.saturating_add(to.saturating_sub(from).saturating_mul(step) / denom);
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}
