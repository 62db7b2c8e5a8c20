use clap::Parser;
use std::time::Duration;

use crate::countdown::{DEFAULT_CELEBRATION_TEXT, DEFAULT_EVENT_NAME, TargetMoment};
use crate::render::{DEFAULT_FONT_FAMILY, DEFAULT_OVERLAY_TEXT};

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_u16, parse_target};
use super::types::PositiveU16;

pub const DEFAULT_TARGET: &str = "2025-10-10T00:00:00";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7861;
pub const DEFAULT_PORT_ATTEMPTS: u16 = 10;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Countdown-and-reveal widget: a calendar until the target moment, then a looping cake-cutting animation, served over HTTP."
)]
pub struct RevealerArgs {
    /// Target moment in local time (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
    #[arg(long, short = 't', default_value = DEFAULT_TARGET, value_parser = parse_target)]
    pub target: TargetMoment,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// First port to try
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Consecutive ports to probe before falling back to --port
    #[arg(
        long = "port-attempts",
        default_value_t = PositiveU16::saturating(DEFAULT_PORT_ATTEMPTS),
        value_parser = parse_positive_u16
    )]
    pub port_attempts: PositiveU16,

    /// How often the page polls for updates (supports ms/s/m/h)
    #[arg(long = "poll-interval", default_value = "2s", value_parser = parse_duration_arg)]
    pub poll_interval: Duration,

    /// Name used in the countdown text ("Time until <name>: ...")
    #[arg(long = "event-name", default_value = DEFAULT_EVENT_NAME)]
    pub event_name: String,

    /// Text shown once the target moment is reached
    #[arg(long = "celebration-text", default_value = DEFAULT_CELEBRATION_TEXT)]
    pub celebration_text: String,

    /// Message drawn over the final frames of the animation
    #[arg(long = "overlay-text", default_value = DEFAULT_OVERLAY_TEXT)]
    pub overlay_text: String,

    /// Preferred font family for image text
    #[arg(long = "font-family", default_value = DEFAULT_FONT_FAMILY)]
    pub font_family: String,

    /// Path to config file (TOML or JSON)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by REVEALER_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
