//! Resolved runtime settings, built once from CLI args plus config.
use std::time::Duration;

use crate::args::RevealerArgs;
use crate::countdown::{CountdownLabels, TargetMoment};
use crate::render::RenderSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: TargetMoment,
    pub labels: CountdownLabels,
    pub render: RenderSettings,
    pub host: String,
    pub port: u16,
    pub port_attempts: u16,
    pub poll_interval: Duration,
}

impl From<&RevealerArgs> for Settings {
    fn from(args: &RevealerArgs) -> Self {
        Self {
            target: args.target,
            labels: CountdownLabels {
                event_name: args.event_name.clone(),
                celebration_text: args.celebration_text.clone(),
            },
            render: RenderSettings::for_target(args.target, &args.font_family, &args.overlay_text),
            host: args.host.clone(),
            port: args.port,
            port_attempts: args.port_attempts.get(),
            poll_interval: args.poll_interval,
        }
    }
}
